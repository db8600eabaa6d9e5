use crate::{
    api::api_structs::MatchRecord,
    model::{
        constants::EMPTY_FIELD,
        structures::side::Side,
        teams::{resolve_outcome, resolve_scores, resolve_side, Roster}
    }
};

/// One export column: a header plus a value extractor decided by the call
/// site.
pub struct Column<'a, T> {
    pub header: &'a str,
    pub value: Box<dyn Fn(&T) -> String + 'a>
}

impl<'a, T> Column<'a, T> {
    pub fn new(header: &'a str, value: impl Fn(&T) -> String + 'a) -> Column<'a, T> {
        Column {
            header,
            value: Box::new(value)
        }
    }
}

/// Serializes records into delimited text: header row, then one row per
/// record. Fields containing the delimiter, a quote, or a newline are quoted
/// with inner quotes doubled, since player and map names are free text.
pub fn to_delimited_text<T>(records: &[T], columns: &[Column<T>], delimiter: char) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);

    let header = columns
        .iter()
        .map(|column| escape_field(column.header, delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string());
    rows.push(header);

    for record in records {
        let row = columns
            .iter()
            .map(|column| escape_field(&(column.value)(record), delimiter))
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
        rows.push(row);
    }

    rows.join("\n")
}

fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// The match-history CSV schema: Match ID, Date Played, Map, Server, Team,
/// Blue Score, Red Score, Outcome — all relative to a focal participant.
pub fn match_history_columns<'a>(
    focal_discord_id: Option<&'a str>,
    roster: &'a Roster
) -> Vec<Column<'a, MatchRecord>> {
    vec![
        Column::new("Match ID", |m: &MatchRecord| {
            m.match_id.map(|id| id.to_string()).unwrap_or_else(|| EMPTY_FIELD.to_string())
        }),
        Column::new("Date Played", |m: &MatchRecord| {
            m.created_at.format("%Y-%m-%d %H:%M").to_string()
        }),
        Column::new("Map", |m: &MatchRecord| {
            m.map.clone().unwrap_or_else(|| EMPTY_FIELD.to_string())
        }),
        Column::new("Server", |m: &MatchRecord| {
            m.server.clone().unwrap_or_else(|| EMPTY_FIELD.to_string())
        }),
        Column::new("Team", move |m: &MatchRecord| {
            match resolve_side(m, focal_discord_id) {
                Side::Blue => "Blue".to_string(),
                Side::Red => "Red".to_string(),
                Side::Unknown => "Unknown".to_string()
            }
        }),
        Column::new("Blue Score", |m: &MatchRecord| {
            let (blue, _) = resolve_scores(m);
            blue.map(|s| s.to_string()).unwrap_or_else(|| EMPTY_FIELD.to_string())
        }),
        Column::new("Red Score", |m: &MatchRecord| {
            let (_, red) = resolve_scores(m);
            red.map(|s| s.to_string()).unwrap_or_else(|| EMPTY_FIELD.to_string())
        }),
        Column::new("Outcome", move |m: &MatchRecord| {
            let side = resolve_side(m, focal_discord_id);
            resolve_outcome(m.match_outcome, side).to_string()
        }),
    ]
}
