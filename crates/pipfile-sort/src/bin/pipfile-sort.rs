use std::process::ExitCode;

use pipfile_sort::main as pipfile_sort_main;

fn main() -> ExitCode {
    pipfile_sort_main(std::env::args_os())
}
