use crate::error::{EngineError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use target_sum_shared_kernel::Problem;

/// Load problems from a batch file, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns `FileRead` if the source cannot be read and `Json`/`Problem` for
/// the first malformed line.
pub fn load(path: &Path) -> Result<Vec<Problem>> {
    let read_err = |source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let problems = if path == Path::new("-") {
        parse(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(read_err)?;
        parse(BufReader::new(file))
    }
    .map_err(|e| match e {
        EngineError::FileRead { source, .. } => read_err(source),
        other => other,
    })?;

    debug!("loaded {} problems from {}", problems.len(), path.display());
    Ok(problems)
}

/// Parse one problem per line.
///
/// Blank lines and `#` comments are skipped. Lines starting with `{` are
/// JSON objects (`{"numbers":[..],"target":N}`); anything else uses the
/// `<target>: <numbers>` text format.
///
/// # Errors
/// See [`load`]. The path of a `FileRead` error is `-`.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| EngineError::FileRead {
            path: "-".into(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let problem = if line.starts_with('{') {
            serde_json::from_str(line).map_err(|source| EngineError::Json {
                line: line_no,
                source,
            })?
        } else {
            line.parse().map_err(|source| EngineError::Problem {
                line: line_no,
                source,
            })?
        };
        problems.push(problem);
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixes_text_and_json_lines() {
        let input = "# header\n3: 1 1 1 1 1\n\n{\"numbers\":[1,2,3],\"target\":0}\n";
        let problems = parse(input.as_bytes()).unwrap();
        assert_eq!(
            problems,
            vec![
                Problem::new(vec![1, 1, 1, 1, 1], 3),
                Problem::new(vec![1, 2, 3], 0),
            ]
        );
    }

    #[test]
    fn reports_line_number_of_bad_text() {
        let err = parse("0: 1\n0 1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::Problem { line: 2, .. }));
    }

    #[test]
    fn reports_line_number_of_bad_json() {
        let err = parse("\n\n{\"numbers\":[1]}\n".as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::Json { line: 3, .. }));
    }

    #[test]
    fn empty_input_yields_no_problems() {
        assert!(parse("".as_bytes()).unwrap().is_empty());
    }
}
