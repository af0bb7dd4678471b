use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("Failed to open file {:?}: {}", path, err),
        )
    })?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> io::Result<Box<dyn BufRead>> {
    if file_path_str == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(get_dynamic_reader(Path::new(file_path_str))?))
    }
}

///
/// Get a writer for a file, gzip-compressed when the path ends in `.gz`.
///
/// Parent directories are created as needed. The returned writer must be
/// flushed (or dropped) for the data to land on disk.
///
pub fn get_dynamic_writer(path: &Path) -> io::Result<Box<dyn Write>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    let writer: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(file),
    };

    Ok(writer)
}

///
/// Get a writer for a file, or stdout when no path is given.
///
pub fn get_dynamic_writer_w_stdout(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => get_dynamic_writer(path),
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("terms.txt")]
    #[case("terms.txt.gz")]
    fn test_writer_and_reader_agree(#[case] file_name: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested").join(file_name);

        {
            let mut writer = get_dynamic_writer(&path).unwrap();
            writeln!(writer, "apple").unwrap();
            writeln!(writer, "banana").unwrap();
            writer.flush().unwrap();
        }

        let lines: Vec<String> = get_dynamic_reader(&path)
            .unwrap()
            .lines()
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(lines, vec!["apple".to_string(), "banana".to_string()]);
    }

    #[rstest]
    fn test_missing_file_names_path() {
        let err = get_dynamic_reader(Path::new("does/not/exist.txt")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("exist.txt"));
    }
}
