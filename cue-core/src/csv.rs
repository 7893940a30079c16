use anyhow::{Result, bail};
use cue_types::{BoardCell, ClueWord, HistoricResponse};
use tracing::warn;

/// Split raw feed text into trimmed, non-empty lines. The first surviving
/// line is always the header.
fn data_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse the clue feed: `id,word,category` with a header line.
///
/// Rows with fewer than three columns are skipped with a warning. A feed
/// with no data rows at all is an error.
pub fn parse_clues(text: &str) -> Result<Vec<ClueWord>> {
    let lines = data_lines(text);
    if lines.len() <= 1 {
        bail!("clue feed has no data rows");
    }

    let mut clues = Vec::new();
    for (number, line) in lines.iter().enumerate().skip(1) {
        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() < 3 {
            warn!(row = number + 1, "skipping malformed clue row: {line}");
            continue;
        }
        clues.push(ClueWord {
            id: columns[0].trim().to_string(),
            word: columns[1].trim().to_string(),
            category: columns[2].trim().to_string(),
        });
    }
    Ok(clues)
}

/// Parse the board feed: `x,y,r,g,b` with a header line.
///
/// Rows with fewer than five columns, a row letter that is not a single
/// character, or numeric fields that fail to parse are skipped with a
/// warning. A feed with no data rows at all is an error.
pub fn parse_board(text: &str) -> Result<Vec<BoardCell>> {
    let lines = data_lines(text);
    if lines.len() <= 1 {
        bail!("board feed has no data rows");
    }

    let mut cells = Vec::new();
    for (number, line) in lines.iter().enumerate().skip(1) {
        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() < 5 {
            warn!(row = number + 1, "skipping malformed board row: {line}");
            continue;
        }

        let letter = columns[0].trim();
        let mut chars = letter.chars();
        let (Some(x), None) = (chars.next(), chars.next()) else {
            warn!(row = number + 1, "skipping board row with bad row letter: {line}");
            continue;
        };

        let numbers: Result<Vec<i32>, _> = columns[1..5]
            .iter()
            .map(|column| column.trim().parse::<i32>())
            .collect();
        let Ok(numbers) = numbers else {
            warn!(row = number + 1, "skipping board row with bad numeric field: {line}");
            continue;
        };

        cells.push(BoardCell::new(x, numbers[0], numbers[1], numbers[2], numbers[3]));
    }
    Ok(cells)
}

/// Parse the historic response feed: nine fixed columns, order-dependent.
///
/// Short rows are dropped silently, and a feed with no data rows yields an
/// empty set rather than an error. That asymmetry with the clue and board
/// feeds is deliberate: missing comparison data only degrades feedback.
pub fn parse_historic(text: &str) -> Vec<HistoricResponse> {
    let lines = data_lines(text);
    if lines.len() <= 1 {
        return Vec::new();
    }

    lines[1..]
        .iter()
        .filter_map(|line| {
            let columns: Vec<&str> = line.split(',').collect();
            if columns.len() < 9 {
                return None;
            }
            Some(HistoricResponse {
                user_id: columns[0].to_string(),
                timestamp: columns[1].to_string(),
                clue_category: columns[2].to_string(),
                clue_id: columns[3].to_string(),
                word: columns[4].to_string(),
                coordinate: columns[5].to_string(),
                language: columns[6].to_string(),
                gender: columns[7].to_string(),
                age_range: columns[8].to_string(),
            })
        })
        .collect()
}
