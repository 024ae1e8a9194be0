use chrono::{Datelike, NaiveDateTime};
use std::fmt::{self, Write};

/// The clock face: time with seconds and AM/PM, day of month, month, year, weekday.
pub const DEFAULT_TEMPLATE: &str = concat!(
    r#"[<div class="time">]h:mm:ss[<span class="ap">]A[</span>]"#,
    r#"[</div><div class="day">]D[</div><div class="monthday">]MMMM YYYY<br>dddd[</div>]"#,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Year4,
    Year2,
    Month,
    Month2,
    MonthShort,
    MonthFull,
    Day,
    Day2,
    Weekday,
    WeekdayMin,
    WeekdayShort,
    WeekdayFull,
    Hour24,
    Hour24Pad,
    Hour12,
    Hour12Pad,
    Minute,
    Minute2,
    Second,
    Second2,
    Millis,
    MeridiemUpper,
    MeridiemLower,
}

impl Token {
    /// The chrono strftime spec for this token, `None` when chrono has none.
    fn strftime(self) -> Option<&'static str> {
        let spec = match self {
            Token::Year4 => "%Y",
            Token::Year2 => "%y",
            Token::Month => "%-m",
            Token::Month2 => "%m",
            Token::MonthShort => "%b",
            Token::MonthFull => "%B",
            Token::Day => "%-d",
            Token::Day2 => "%d",
            Token::Weekday => "%w",
            Token::WeekdayMin => return None,
            Token::WeekdayShort => "%a",
            Token::WeekdayFull => "%A",
            Token::Hour24 => "%-H",
            Token::Hour24Pad => "%H",
            Token::Hour12 => "%-I",
            Token::Hour12Pad => "%I",
            Token::Minute => "%-M",
            Token::Minute2 => "%M",
            Token::Second => "%-S",
            Token::Second2 => "%S",
            Token::Millis => "%3f",
            Token::MeridiemUpper => "%p",
            Token::MeridiemLower => "%P",
        };
        Some(spec)
    }
}

// 最長的 token 要排在前面
const TOKENS: &[(&str, Token)] = &[
    ("YYYY", Token::Year4),
    ("MMMM", Token::MonthFull),
    ("dddd", Token::WeekdayFull),
    ("MMM", Token::MonthShort),
    ("ddd", Token::WeekdayShort),
    ("SSS", Token::Millis),
    ("YY", Token::Year2),
    ("MM", Token::Month2),
    ("DD", Token::Day2),
    ("dd", Token::WeekdayMin),
    ("HH", Token::Hour24Pad),
    ("hh", Token::Hour12Pad),
    ("mm", Token::Minute2),
    ("ss", Token::Second2),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::Weekday),
    ("H", Token::Hour24),
    ("h", Token::Hour12),
    ("m", Token::Minute),
    ("s", Token::Second),
    ("A", Token::MeridiemUpper),
    ("a", Token::MeridiemLower),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(Token),
}

/// Compiled form of the segments: runs of strftime text, split where a token
/// has no strftime spec.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Strftime(String),
    WeekdayMin,
}

fn compile(segments: &[Segment]) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut pattern = String::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => pattern.push_str(&text.replace('%', "%%")),
            Segment::Token(token) => match token.strftime() {
                Some(spec) => pattern.push_str(spec),
                None => {
                    if !pattern.is_empty() {
                        pieces.push(Piece::Strftime(std::mem::take(&mut pattern)));
                    }
                    pieces.push(Piece::WeekdayMin);
                }
            },
        }
    }

    if !pattern.is_empty() {
        pieces.push(Piece::Strftime(pattern));
    }
    pieces
}

/// A parsed format template in day.js syntax.
///
/// Parsing never fails: text inside `[...]` and any character that does not
/// start a token is kept literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
    pieces: Vec<Piece>,
}

impl FormatTemplate {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            if c == '[' {
                if let Some(end) = rest[1..].find(']') {
                    if end > 0 {
                        literal.push_str(&rest[1..1 + end]);
                        rest = &rest[end + 2..];
                        continue;
                    }
                }
            }

            if let Some((text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Token(*token));
                rest = &rest[text.len()..];
                continue;
            }

            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            pieces: compile(&segments),
            segments,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn render(&self, at: &NaiveDateTime) -> String {
        let mut out = String::with_capacity(self.source.len() + 16);
        for piece in &self.pieces {
            match piece {
                // 格式字串由 compile 產生，不會失敗
                Piece::Strftime(pattern) => {
                    let _ = write!(out, "{}", at.format(pattern));
                }
                // chrono 沒有 "Th" 這種兩字母的 spec
                Piece::WeekdayMin => out.push_str(&at.weekday().to_string()[..2]),
            }
        }
        out
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
