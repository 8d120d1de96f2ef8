use crate::util::{display_path, read_input};

#[derive(clap::Args)]
pub struct Args {
    /// Path to the object literal to encode (use - for stdin)
    pub file: Option<String>,
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

    let encoded = match objlit::encode(&contents) {
        Ok(encoded) => encoded,
        Err(e) => {
            eprintln!("{}: {e}", display_path(file));
            std::process::exit(1);
        }
    };

    println!("{encoded}");
}
