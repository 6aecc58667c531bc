use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug};
use playfair::{KeySquare, encrypt_with};

const KEY_PROMPT: &str = "Nhap khoa (key): ";
const PLAINTEXT_PROMPT: &str = "Nhap ban ro (plaintext): ";

/// Command-line arguments for the Playfair encrypter.
///
/// With no arguments both the key and the plaintext are read interactively.
#[derive(Parser, Debug, Default)]
#[command(name = "playfair_encrypter", version, about = "Encrypt a message with the Playfair cipher")]
struct Cli {
    /// Key to derive the 5x5 square from (prompted for when absent)
    #[arg(short, long)]
    key: Option<String>,

    /// Plaintext to encrypt (prompted for when absent)
    #[arg(short, long)]
    plaintext: Option<String>,

    /// Print the key square before the ciphertext
    #[arg(short, long)]
    show_square: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the Playfair encrypter.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, &mut stdin.lock(), &mut stdout.lock())
}

/// Sends log records to stderr so stdout only carries the session.
fn init_logger(verbose: bool) {
    let mut builder = Builder::new();

    builder.format(|formatter, record| {
        writeln!(formatter, "[{}] ({}): {}", record.level(), record.target(), record.args())
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if verbose {
        builder.filter(None, LevelFilter::Debug);
    } else {
        builder.filter(None, LevelFilter::Warn);
    }

    builder.init();
}

/// Runs one session: gather key and plaintext, print the ciphertext line.
fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> anyhow::Result<()> {
    let key = match &cli.key {
        Some(key) => key.clone(),
        None => prompt(input, output, KEY_PROMPT)?,
    };
    let plaintext = match &cli.plaintext {
        Some(plaintext) => plaintext.clone(),
        None => prompt(input, output, PLAINTEXT_PROMPT)?,
    };

    let square = KeySquare::new(&key);
    if cli.show_square {
        writeln!(output, "{}", square).context("Failed to write key square")?;
    }

    let ciphertext = encrypt_with(&square, &plaintext);
    debug!("{} plaintext chars -> {} ciphertext letters", plaintext.chars().count(), ciphertext.len());

    writeln!(output, "Ciphertext: {}", ciphertext).context("Failed to write ciphertext")?;
    output.flush().context("Failed to flush output")?;
    Ok(())
}

/// Prints `message` and reads one line. End of input reads as an empty line.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> anyhow::Result<String> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input line")?;
    if read == 0 {
        debug!("end of input at prompt {:?}", message.trim_end());
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(cli: &Cli, stdin: &str) -> String {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        run(cli, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_interactive_session() {
        let out = session(&Cli::default(), "PLAYFAIREXAMPLE\nHIDETHEGOLDINTHETREESTUMP\n");
        assert_eq!(
            out,
            "Nhap khoa (key): Nhap ban ro (plaintext): Ciphertext: BMODZBXDNABEKUDMUIXMMOUVIF\n"
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let out = session(&Cli::default(), "PLAYFAIREXAMPLE\r\nHIDE\r\n");
        assert!(out.ends_with("Ciphertext: BMOD\n"));
    }

    #[test]
    fn test_end_of_input_reads_empty() {
        let out = session(&Cli::default(), "");
        assert_eq!(out, "Nhap khoa (key): Nhap ban ro (plaintext): Ciphertext: \n");

        // Key present, plaintext line missing
        let out = session(&Cli::default(), "KEY");
        assert!(out.ends_with("Ciphertext: \n"));
    }

    #[test]
    fn test_empty_key_line() {
        let out = session(&Cli::default(), "\nAB\n");
        assert!(out.ends_with("Ciphertext: BC\n"));
    }

    #[test]
    fn test_arguments_skip_prompts() {
        let cli = Cli {
            key: Some("PLAYFAIREXAMPLE".to_string()),
            plaintext: Some("hide".to_string()),
            ..Cli::default()
        };
        assert_eq!(session(&cli, ""), "Ciphertext: BMOD\n");
    }

    #[test]
    fn test_key_argument_still_prompts_for_plaintext() {
        let cli = Cli { key: Some(String::new()), ..Cli::default() };
        assert_eq!(session(&cli, "AB\n"), "Nhap ban ro (plaintext): Ciphertext: BC\n");
    }

    #[test]
    fn test_show_square() {
        let cli = Cli {
            key: Some(String::new()),
            plaintext: Some(String::new()),
            show_square: true,
            ..Cli::default()
        };
        assert_eq!(
            session(&cli, ""),
            "A B C D E\nF G H I K\nL M N O P\nQ R S T U\nV W X Y Z\nCiphertext: \n"
        );
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["playfair_encrypter", "-k", "KEY", "--plaintext", "msg", "-s"]).unwrap();
        assert_eq!(cli.key.as_deref(), Some("KEY"));
        assert_eq!(cli.plaintext.as_deref(), Some("msg"));
        assert!(cli.show_square);
        assert!(!cli.verbose);
    }
}
