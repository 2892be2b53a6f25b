//! User-facing output.
//!
//! Progress and the final summary go through the [`printer::Printer`]
//! trait: [`Console`] writes to the terminal, [`logger::Logger`] captures
//! the output for tests.
use self::printer::Printer;

pub mod logger;
pub mod printer;

pub struct Console {}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Printer for Console {
    fn print(&self, output: &str) {
        print!("{output}");
    }

    fn eprint(&self, output: &str) {
        eprint!("{output}");
    }

    fn println(&self, output: &str) {
        println!("{output}");
    }

    fn eprintln(&self, output: &str) {
        eprintln!("{output}");
    }
}
