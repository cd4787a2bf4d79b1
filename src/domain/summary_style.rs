use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryStyle {
    #[default]
    BulletPoints,
    Paragraph,
    Executive,
    Technical,
}

impl SummaryStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BulletPoints => "bullet_points",
            Self::Paragraph => "paragraph",
            Self::Executive => "executive",
            Self::Technical => "technical",
        }
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bullet_points" => Ok(Self::BulletPoints),
            "paragraph" => Ok(Self::Paragraph),
            "executive" => Ok(Self::Executive),
            "technical" => Ok(Self::Technical),
            other => Err(format!(
                "Invalid style: {}. Expected: bullet_points, paragraph, executive, or technical",
                other
            )),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
