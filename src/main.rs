mod logging;

use std::env;

use anyhow::Context;
use console_base32::config::ConsoleConfig;
use console_base32::digest::content_name_of_file;
use console_base32::{decode, encode, try_decode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::load()?;
    logging::init(config.log_level)?;

    let args = env::args().collect::<Vec<_>>();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "encode" => {
            let Some(text) = args.get(2) else {
                eprintln!("❌ Usage: console-base32 encode <text>");
                return Ok(());
            };

            let encoded = encode(text.as_bytes());
            println!("{}", config.wrap_output(&encoded));
            if config.copy {
                copy_to_clipboard(&encoded)?;
            }
        }
        "decode" => {
            let bytes = match try_decode(args.get(2).map(String::as_str)) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    return Ok(());
                }
            };

            match String::from_utf8(bytes) {
                Ok(text) => println!("{}", text),
                Err(e) => println!("{}", to_hex(e.as_bytes())),
            }
        }
        "check" => {
            let Some(text) = args.get(2) else {
                eprintln!("❌ Usage: console-base32 check <base32>");
                return Ok(());
            };

            match decode(text) {
                Ok(bytes) => println!("✅ Valid base32, {} bytes", bytes.len()),
                Err(e) => eprintln!("❌ {}", e),
            }
        }
        "encode-file" => {
            let Some(path) = args.get(2) else {
                eprintln!("❌ Usage: console-base32 encode-file <path> [out]");
                return Ok(());
            };

            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("failed to read {}", path))?;
            let encoded = config.wrap_output(&encode(&bytes));

            match args.get(3) {
                Some(out) => {
                    tokio::fs::write(out, format!("{}\n", encoded))
                        .await
                        .with_context(|| format!("failed to write {}", out))?;
                    println!("✅ Encoded {} bytes into {}", bytes.len(), out);
                }
                None => println!("{}", encoded),
            }
        }
        "decode-file" => {
            if args.len() < 4 {
                eprintln!("❌ Usage: console-base32 decode-file <path> <out>");
                return Ok(());
            }

            let (path, out) = (&args[2], &args[3]);
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path))?;

            // Wrapped output spans several lines.
            let joined: String = content.lines().map(str::trim).collect();
            let bytes = decode(&joined).with_context(|| format!("{} is not valid base32", path))?;

            tokio::fs::write(out, &bytes)
                .await
                .with_context(|| format!("failed to write {}", out))?;
            println!("✅ Decoded {} bytes into {}", bytes.len(), out);
        }
        "hash" => {
            let Some(path) = args.get(2) else {
                eprintln!("❌ Usage: console-base32 hash <path>");
                return Ok(());
            };

            let name = content_name_of_file(path).await?;
            println!("📋 {} {}", name, path);
            if config.copy {
                copy_to_clipboard(&name)?;
            }
        }
        "copy" => {
            let Some(text) = args.get(2) else {
                eprintln!("❌ Usage: console-base32 copy <text>");
                return Ok(());
            };

            copy_to_clipboard(&encode(text.as_bytes()))?;
        }
        _ => {
            eprintln!("❌ Unknown command: {}", args[1]);
            print_usage();
        }
    }

    Ok(())
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    println!("✅ Copied {} characters to clipboard", text.len());
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn print_usage() {
    println!("🔐 Base32 Console");
    println!("Usage: console-base32 <command> [args]");
    println!();
    println!("Commands:");
    println!("  encode <text>                    Encode text as unpadded base32");
    println!("  decode <base32>                  Decode base32 to text (hex if not UTF-8)");
    println!("  check <base32>                   Validate a base32 string");
    println!("  encode-file <path> [out]         Encode a file");
    println!("  decode-file <path> <out>         Decode a file");
    println!("  hash <path>                      Print the content name of a file");
    println!("  copy <text>                      Encode text and copy it to clipboard");
    println!();
    println!("Configuration:");
    println!("  Create a `base32.json` file with the following structure:");
    println!("  {{");
    println!("    \"wrap\": 76,");
    println!("    \"copy\": false,");
    println!("    \"log_level\": \"warn\"");
    println!("  }}");
    println!();
    println!("Environment Variables (when base32.json is absent):");
    println!("  BASE32_WRAP                      Column width for encoded output");
    println!("  BASE32_COPY                      Copy results to clipboard (1/true/yes)");
    println!("  BASE32_LOG                       Log level (off, error, warn, info, debug, trace)");
    println!();
    println!("Examples:");
    println!("  console-base32 encode foobar");
    println!("  console-base32 decode MZXW6YTBOI");
    println!("  console-base32 hash backup.tar");
}
