use objlit::FormatConfig;

use crate::util::{display_path, read_input};

#[derive(clap::Args)]
pub struct Args {
    /// Path to the object literal to sort (use - for stdin)
    pub file: Option<String>,
    /// Number of spaces per indentation level
    #[arg(short, long, default_value = "2")]
    pub indent_width: usize,
}

pub fn run(args: Args) {
    let file = args.file.as_deref();
    let contents = match read_input(file) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    let config = FormatConfig::new().with_indent_width(args.indent_width);
    let output = match objlit::sort_text_with_config(&contents, &config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{}: {e}", display_path(file));
            std::process::exit(1);
        }
    };

    println!("{output}");
}
