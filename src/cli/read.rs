use std::{ffi::OsString, fs::File, io::BufReader, path::Path};

use dpll_sat::{builder::ParserInfo, context::Context, types::err::ErrorKind};

/// Ways in which reading a formula from a file may fail.
pub(super) enum ReadError {
    Missing,
    NoExtension,
    Unopened(std::io::Error),
    Parse(ErrorKind),
    UnsupportedExtension(OsString),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Missing => write!(f, "A path to a DIMACS file, or --random, is required."),
            Self::NoExtension => write!(f, "The file has no extension, expected .cnf or .xz."),
            Self::Unopened(e) => write!(f, "Unable to open the file: {e}"),
            Self::Parse(e) => write!(f, "Unable to parse the file: {e:?}"),
            Self::UnsupportedExtension(extension) => {
                write!(f, "Files with extension {extension:?} are not supported.")
            }
        }
    }
}

/// Reads the DIMACS file at `path` into `context`, and writes a summary of the parse.
pub(super) fn read_dimacs(path: &Path, context: &mut Context) -> Result<(), ReadError> {
    println!("c Reading DIMACS file from {path:?}");

    let file = File::open(path).map_err(ReadError::Unopened)?;

    let info = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if extension == "cnf" => context.read_dimacs(BufReader::new(&file)),

        Some(extension) => return Err(ReadError::UnsupportedExtension(extension.to_os_string())),

        None => return Err(ReadError::NoExtension),
    }
    .map_err(ReadError::Parse)?;

    write_parse_summary(&info);
    Ok(())
}

fn write_parse_summary(info: &ParserInfo) {
    match (info.expected_atoms, info.expected_clauses) {
        (Some(atoms), Some(clauses)) => {
            println!("c Expected {atoms} atoms and {clauses} clauses.")
        }
        _ => println!("c No problem specification was found."),
    }

    println!("c Read     {} atoms and {} clauses.", info.added_atoms, info.added_clauses);
}
