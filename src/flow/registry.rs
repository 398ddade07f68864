use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of step kinds a flow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    Information,
    TextInput,
    SingleChoice,
    MultipleChoice,
    EmojiScale,
    RatingScale,
    ImageCapture,
    AudioCapture,
    VideoCapture,
    ImageDisplay,
    AudioDisplay,
    VideoDisplay,
}

/// The shape of the value a respondent produces on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerShape {
    /// Display-only steps collect nothing.
    None,
    Text,
    Choice,
    Choices,
    Media,
}

/// Static description of a step kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepKindDescriptor {
    pub kind: StepKind,
    pub name: &'static str,
    pub label: &'static str,
    pub answer: AnswerShape,
    /// Whether the recorded answer selects the next step through an option.
    pub branches_on_answer: bool,
    /// Whether a step of this kind is unusable without options.
    pub requires_options: bool,
}

macro_rules! define_step_kinds {
    ( $( ($variant:ident, $name:literal, $label:literal, $answer:ident, $branches:expr, $options:expr) ),* $(,)? ) => {
        impl StepKind {
            /// Every kind, in catalog order.
            pub const ALL: &'static [StepKind] = &[ $( StepKind::$variant ),* ];

            pub fn descriptor(self) -> StepKindDescriptor {
                match self {
                    $(
                        StepKind::$variant => StepKindDescriptor {
                            kind: StepKind::$variant,
                            name: $name,
                            label: $label,
                            answer: AnswerShape::$answer,
                            branches_on_answer: $branches,
                            requires_options: $options,
                        },
                    )*
                }
            }

            /// Looks a kind up by its canonical name.
            pub fn from_name(name: &str) -> Option<StepKind> {
                match name {
                    $( $name => Some(StepKind::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_step_kinds! {
    (Information,    "information",    "Information text", None,    false, false),
    (TextInput,      "textInput",      "Free text",        Text,    false, false),
    (SingleChoice,   "singleChoice",   "Single choice",    Choice,  true,  true),
    (MultipleChoice, "multipleChoice", "Multiple choice",  Choices, false, true),
    (EmojiScale,     "emojiScale",     "Emoji scale",      Choice,  true,  true),
    (RatingScale,    "ratingScale",    "Rating scale",     Choice,  true,  true),
    (ImageCapture,   "imageCapture",   "Photo upload",     Media,   false, false),
    (AudioCapture,   "audioCapture",   "Audio recording",  Media,   false, false),
    (VideoCapture,   "videoCapture",   "Video recording",  Media,   false, false),
    (ImageDisplay,   "imageDisplay",   "Image",            None,    false, false),
    (AudioDisplay,   "audioDisplay",   "Audio",            None,    false, false),
    (VideoDisplay,   "videoDisplay",   "Video",            None,    false, false),
}

impl StepKind {
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn branches_on_answer(self) -> bool {
        self.descriptor().branches_on_answer
    }

    pub fn collects_answer(self) -> bool {
        self.descriptor().answer != AnswerShape::None
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves type names found in external documents to step kinds.
///
/// Canonical names are always registered. Documents written by other tools
/// can be accepted by adding aliases, e.g. `"question"` for `singleChoice`.
#[derive(Debug, Clone)]
pub struct KindRegistry {
    names: AHashMap<String, StepKind>,
}

impl Default for KindRegistry {
    fn default() -> Self {
        let names = StepKind::ALL
            .iter()
            .map(|kind| (kind.name().to_string(), *kind))
            .collect();
        Self { names }
    }
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `user_type_name` onto the kind registered as `canonical_name`.
    /// Unknown canonical names are ignored.
    pub fn with_alias(mut self, user_type_name: &str, canonical_name: &str) -> Self {
        if let Some(kind) = StepKind::from_name(canonical_name) {
            self.names.insert(user_type_name.to_string(), kind);
        }
        self
    }

    pub fn resolve(&self, type_name: &str) -> Option<StepKind> {
        self.names.get(type_name).copied()
    }
}
