use serde::Serialize;

/// One probe result, display-ready. Produced fresh every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Line(String),
    Lines(Vec<String>),
}

impl Reading {
    pub fn lines(&self) -> &[String] {
        match self {
            Reading::Line(l)   => std::slice::from_ref(l),
            Reading::Lines(ls) => ls,
        }
    }
}
