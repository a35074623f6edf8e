pub const NO_TRANSCRIPT: &str = "No transcript available yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    /// `Speaker: utterance`, both sides trimmed.
    Spoken { speaker: String, text: String },
    /// A line without a speaker prefix, kept verbatim.
    Plain(String),
}

impl TranscriptLine {
    pub fn parse(line: &str) -> Self {
        match line.find(':') {
            Some(idx) if idx > 0 => TranscriptLine::Spoken {
                speaker: line[..idx].trim().to_string(),
                text: line[idx + 1..].trim().to_string(),
            },
            _ => TranscriptLine::Plain(line.to_string()),
        }
    }

    /// The speaker as displayed, with its trailing colon.
    pub fn speaker_label(&self) -> Option<String> {
        match self {
            TranscriptLine::Spoken { speaker, .. } => Some(format!("{speaker}:")),
            TranscriptLine::Plain(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TranscriptLine::Spoken { text, .. } => text,
            TranscriptLine::Plain(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptBody {
    Placeholder(&'static str),
    Lines(Vec<TranscriptLine>),
}

pub fn parse_transcript(raw: Option<&str>) -> TranscriptBody {
    match raw.filter(|t| !t.is_empty()) {
        None => TranscriptBody::Placeholder(NO_TRANSCRIPT),
        Some(text) => TranscriptBody::Lines(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(TranscriptLine::parse)
                .collect(),
        ),
    }
}
