//! CLI for postmd - markdown-subset to HTML renderer

use clap::Parser;
use postmd::{MarkdownToHtml, PostTable, RenderOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input markdown file, or a directory of posts when --post is given
    input: PathBuf,

    /// Output HTML file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Render the post with this identifier from the INPUT directory
    #[arg(long)]
    post: Option<String>,

    /// HTML-escape literal text and code content
    #[arg(long)]
    escape_html: bool,
}

fn run(args: &Args) -> postmd::Result<String> {
    let converter = MarkdownToHtml::new(RenderOptions {
        escape_html: args.escape_html,
    });

    match &args.post {
        Some(id) => {
            let table = PostTable::from_dir(&args.input)?;
            log::debug!("post table holds {} post(s)", table.len());
            table.render(id, &converter)
        }
        None => converter.convert_file(&args.input),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(html) => {
            if let Some(output) = &args.output {
                if let Err(e) = std::fs::write(output, &html) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully rendered to {:?}", output);
            } else {
                println!("{}", html);
            }
        }
        Err(e) => {
            eprintln!("Error rendering markdown: {}", e);
            std::process::exit(1);
        }
    }
}
