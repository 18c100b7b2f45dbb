use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Command, Arg, ArgAction, ArgMatches};

use neander_asm::{translate, AssemblerError, TranslationReport};

pub fn args(application_name: &'static str) -> Command {
    Command::new(application_name)
        .about("Assembler for the Neander educational machine")
        .arg(Arg::new("FILE").required(true).help("Assembly source file to translate"))
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the memory image to this path instead of the derived one"),
        )
        .arg(
            Arg::new("dump")
                .short('x')
                .long("dump")
                .action(ArgAction::SetTrue)
                .help("Print the image bytes to stdout after translating"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .help("Set the type of log messages to print"),
        )
}

/// Derive the memory image path from the source path by swapping the file
/// name's extension for `.mem` (appended when there is no extension).
/// A dotfile name like `.asm` counts as extensionless and becomes
/// `.asm.mem`.
pub fn derive_output_filename(input: &Path) -> PathBuf {
    input.with_extension("mem")
}

pub fn run(matches: &ArgMatches) -> Result<TranslationReport, AssemblerError> {
    let log_level = match matches.get_one("log-level").map(|s: &String| s.as_str()) {
        Some("trace") => log::Level::Trace,
        Some("debug") => log::Level::Debug,
        Some("info") => log::Level::Info,
        Some("warn") => log::Level::Warn,
        Some("error") => log::Level::Error,
        _ => log::Level::Info,
    };

    simple_logger::SimpleLogger::new()
        .with_level(log_level.to_level_filter())
        .without_timestamps()
        .init()
        .unwrap();

    let filename = matches.get_one::<String>("FILE").unwrap();
    let output_filename = match matches.get_one::<String>("output") {
        Some(output) => PathBuf::from(output),
        None => derive_output_filename(Path::new(filename)),
    };

    let input = File::open(filename).map_err(|err| AssemblerError::Input(format!("{}: {}", filename, err)))?;
    let output = File::create(&output_filename)
        .map_err(|err| AssemblerError::Output(format!("{}: {}", output_filename.display(), err)))?;

    // The writer is dropped (and the file closed) before anything is
    // reported, even when translation fails partway.
    let report = {
        let mut writer = BufWriter::new(output);
        let report = translate(BufReader::new(input), &mut writer)?;
        writer
            .flush()
            .map_err(|err| AssemblerError::Output(format!("{}: {}", output_filename.display(), err)))?;
        report
    };

    if matches.get_flag("dump") {
        let image = fs::read(&output_filename)
            .map_err(|err| AssemblerError::Output(format!("{}: {}", output_filename.display(), err)))?;
        println!("Output:");
        for byte in image.iter() {
            print!("{:02x} ", byte);
        }
        println!();
    }

    println!(
        "Translated {} to {} ({} records, {} lines skipped)",
        filename,
        output_filename.display(),
        report.records,
        report.diagnostics.len()
    );
    Ok(report)
}

#[cfg(test)]
mod derivation_tests {
    use std::path::{Path, PathBuf};

    use super::derive_output_filename;

    #[test]
    fn extension_is_replaced() {
        assert_eq!(derive_output_filename(Path::new("prog.asm")), PathBuf::from("prog.mem"));
    }

    #[test]
    fn missing_extension_is_appended() {
        assert_eq!(derive_output_filename(Path::new("prog")), PathBuf::from("prog.mem"));
    }

    #[test]
    fn dotfile_names_count_as_extensionless() {
        assert_eq!(derive_output_filename(Path::new(".asm")), PathBuf::from(".asm.mem"));
    }

    #[test]
    fn directories_are_untouched() {
        assert_eq!(
            derive_output_filename(Path::new("a/b.x/c.asm")),
            PathBuf::from("a/b.x/c.mem")
        );
    }
}
