//! `jsonl-merge` - merge per-dataset JSONL files into unified train/test splits.

use jsonl_merge::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
