use grid_planning::SearchResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not write result: {0}")]
    Io(#[from] io::Error),

    #[error("could not serialise result: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a [SearchResult]. Field order is the order of the keys in the document.
#[derive(Debug, Serialize)]
pub struct ResultRecord<'a> {
    pub algorithm_map: Vec<&'a [i32]>,
    pub status_code: u16,
    pub path_length: i32,
    pub path: Vec<[i32; 2]>,
    /// Seconds.
    pub computing_time: f64,
    /// Megabytes.
    pub memory_usage: f64,
}

impl<'a> From<&'a SearchResult> for ResultRecord<'a> {
    fn from(result: &'a SearchResult) -> ResultRecord<'a> {
        ResultRecord {
            algorithm_map: result.work_grid().rows().collect(),
            status_code: u16::from(result.status()),
            path_length: result.path_length(),
            path: result.path().iter().map(|p| [p.row, p.col]).collect(),
            computing_time: result.metrics().elapsed_secs(),
            memory_usage: result.metrics().memory_mb(),
        }
    }
}

/// Writes `result` as a JSON object indented by four spaces.
pub fn write_result<W: Write>(mut writer: W, result: &SearchResult) -> Result<(), WriteError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    ResultRecord::from(result).serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Creates or truncates the file at `path` and writes `result` to it.
pub fn save_result<P: AsRef<Path>>(path: P, result: &SearchResult) -> Result<(), WriteError> {
    let file = File::create(path)?;
    write_result(BufWriter::new(file), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_planning::{Algorithm, Grid, NoMeasure, StatusCode};
    use serde_json::Value;

    fn render(result: &SearchResult) -> String {
        let mut buffer = Vec::new();
        write_result(&mut buffer, result).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn writes_wavefront_result() {
        let grid = Grid::from_rows(&[[2, 0, 1], [0, 0, 1], [1, 0, 3]]).unwrap();
        let result = Algorithm::Wavefront.run(Ok(&grid), &mut NoMeasure);
        let text = render(&result);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status_code"], 200);
        assert_eq!(value["path_length"], 4);
        assert_eq!(
            value["path"],
            serde_json::json!([[0, 0], [1, 0], [1, 1], [2, 1], [2, 2]])
        );
        assert_eq!(
            value["algorithm_map"],
            serde_json::json!([[0, 1, -1], [1, 2, -1], [-1, 3, 4]])
        );
        assert_eq!(value["computing_time"], 0.0);
        assert_eq!(value["memory_usage"], 0.0);
    }

    #[test]
    fn keys_keep_declaration_order() {
        let text = render(&SearchResult::rejected(StatusCode::MissingGoal));
        let keys = [
            "\"algorithm_map\"",
            "\"status_code\"",
            "\"path_length\"",
            "\"path\"",
            "\"computing_time\"",
            "\"memory_usage\"",
        ];
        let offsets: Vec<usize> = keys.iter().map(|key| text.find(key).unwrap()).collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]), "{text}");
        assert!(text.starts_with("{\n    \"algorithm_map\": []"), "{text}");
    }

    #[test]
    fn rejected_result_has_empty_map() {
        let value: Value =
            serde_json::from_str(&render(&SearchResult::rejected(StatusCode::SourceNotFound)))
                .unwrap();
        assert_eq!(value["status_code"], 504);
        assert_eq!(value["path_length"], -1);
        assert_eq!(value["algorithm_map"], serde_json::json!([]));
        assert_eq!(value["path"], serde_json::json!([]));
    }
}
