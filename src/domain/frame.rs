use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Reference frames the host can view the spinner from
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    #[serde(rename = "world")]
    World = 0,
    /// Aligned with the angular momentum, precessing about it
    #[serde(rename = "J")]
    AngularMomentum = 1,
    #[serde(rename = "body")]
    Body = 2,
    /// Aligned with the instantaneous angular velocity
    #[serde(rename = "omega")]
    AngularVelocity = 3,
}

impl Frame {
    pub fn from_key(key: &str) -> Option<Frame> {
        match key {
            "world" => Some(Frame::World),
            "J" => Some(Frame::AngularMomentum),
            "body" => Some(Frame::Body),
            "omega" => Some(Frame::AngularVelocity),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Frame::World => "world",
            Frame::AngularMomentum => "J",
            Frame::Body => "body",
            Frame::AngularVelocity => "omega",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_serde_names() {
        for frame in [Frame::World, Frame::AngularMomentum, Frame::Body, Frame::AngularVelocity] {
            assert_eq!(Frame::from_key(frame.key()), Some(frame));
            let json = serde_json::to_string(&frame).expect("serialize");
            assert_eq!(json, format!("\"{}\"", frame.key()));
        }
        assert_eq!(Frame::from_key("nope"), None);
    }
}
