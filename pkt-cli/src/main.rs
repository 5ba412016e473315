use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use pkt_core::{Silent, StageTrace, decode_traced, encode_traced};

#[derive(Parser)]
#[command(name = "pkt-cli")]
#[command(about = "Packet Tracer save (de|en)crypt – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Print hexdumps from all stages of the process
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decrypt a .pkt file into an XML document
    Decrypt {
        /// Path to the .pkt save file
        pkt: PathBuf,

        /// Path to write the XML document
        out_xml: PathBuf,
    },

    /// Encrypt an XML document into a .pkt file
    Encrypt {
        /// Path to the XML document
        xml: PathBuf,

        /// Path to write the .pkt save file
        out_pkt: PathBuf,
    },
}

/// Prints an 8-byte head/tail sample and the total length per stage
struct HexDump;

impl StageTrace for HexDump {
    fn stage(&mut self, label: &str, data: &[u8]) {
        if data.len() <= 16 {
            println!("{label:<12} | {}   l={}", hex::encode(data), data.len());
        } else {
            println!(
                "{label:<12} | {}  ...  {}   l={}",
                hex::encode(&data[..8]),
                hex::encode(&data[data.len() - 8..]),
                data.len()
            );
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decrypt { pkt, out_xml } => {
            cmd_decrypt(&pkt, &out_xml, cli.verbose)?;
        }
        Commands::Encrypt { xml, out_pkt } => {
            cmd_encrypt(&xml, &out_pkt, cli.verbose)?;
        }
    }

    Ok(())
}

fn cmd_decrypt(pkt_path: &PathBuf, out_xml_path: &PathBuf, verbose: bool) -> Result<()> {
    let pkt = fs::read(pkt_path)
        .with_context(|| format!("Failed to read save file: {}", pkt_path.display()))?;

    let mut hexdump = HexDump;
    let mut silent = Silent;
    let trace: &mut dyn StageTrace = if verbose { &mut hexdump } else { &mut silent };

    if verbose {
        println!("Decrypting file: {}", pkt_path.display());
        trace.stage("initial", &pkt);
    }

    let xml = decode_traced(&pkt, trace)
        .with_context(|| format!("Failed to decrypt: {}", pkt_path.display()))?;

    if verbose {
        char_preview(&xml);
    }

    fs::write(out_xml_path, &xml)
        .with_context(|| format!("Failed to write XML file: {}", out_xml_path.display()))?;

    println!("[ok] wrote XML -> {}", out_xml_path.display());

    Ok(())
}

fn cmd_encrypt(xml_path: &PathBuf, out_pkt_path: &PathBuf, verbose: bool) -> Result<()> {
    let xml = fs::read(xml_path)
        .with_context(|| format!("Failed to read XML file: {}", xml_path.display()))?;

    let mut hexdump = HexDump;
    let mut silent = Silent;
    let trace: &mut dyn StageTrace = if verbose { &mut hexdump } else { &mut silent };

    if verbose {
        println!("Encrypting file: {}", xml_path.display());
        trace.stage("initial", &xml);
    }

    let pkt = encode_traced(&xml, trace)
        .with_context(|| format!("Failed to encrypt: {}", xml_path.display()))?;

    fs::write(out_pkt_path, &pkt)
        .with_context(|| format!("Failed to write save file: {}", out_pkt_path.display()))?;

    println!("[ok] wrote save file -> {}", out_pkt_path.display());

    Ok(())
}

/// First and last 64 characters of the recovered document, lossy UTF-8
fn char_preview(data: &[u8]) {
    let text = String::from_utf8_lossy(data);
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= 128 {
        println!("{}", text);
        return;
    }

    let head: String = chars[..64].iter().collect();
    let tail: String = chars[chars.len() - 64..].iter().collect();
    println!("{}", head);
    println!("  ...  ");
    println!("{}", tail);
}
