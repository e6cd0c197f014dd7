//! Builtin Example Definitions
//!
//! Local example set shipped with the editor. Payloads live under `samples/`
//! and are embedded at compile time.

use super::types::{AnyExample, Example, ExampleFile, MultiFileExample};

/// Single-file examples, in dropdown order
pub const BUILTIN_EXAMPLES: &[BuiltinExample] = &[
    BuiltinExample {
        id: "hello-sine",
        title: "Hello Sine",
        description: "A single sine oscillator on both outputs.",
        category: "basics",
        subcategory: Some("hello-world"),
        code: include_str!("../../samples/hello_sine.cpp"),
    },
    BuiltinExample {
        id: "hello-noise",
        title: "Hello Noise",
        description: "White noise at a safe level.",
        category: "basics",
        subcategory: Some("hello-world"),
        code: include_str!("../../samples/hello_noise.cpp"),
    },
    BuiltinExample {
        id: "hello-blink",
        title: "Hello Blink",
        description: "Blink the onboard LED from the control loop.",
        category: "basics",
        subcategory: Some("hello-world"),
        code: include_str!("../../samples/hello_blink.cpp"),
    },
    BuiltinExample {
        id: "knob-to-pitch",
        title: "Knob to Pitch",
        description: "Map a knob to oscillator pitch over four octaves.",
        category: "basics",
        subcategory: Some("controls"),
        code: include_str!("../../samples/knob_to_pitch.cpp"),
    },
    BuiltinExample {
        id: "wavetable-sweep",
        title: "Wavetable Sweep",
        description: "Slowly morph through sine, triangle, saw and square tables.",
        category: "oscillators",
        subcategory: Some("waveforms"),
        code: include_str!("../../samples/wavetable_sweep.cpp"),
    },
    BuiltinExample {
        id: "two-op-fm",
        title: "Two-Operator FM",
        description: "Classic carrier/modulator pair with a fixed ratio.",
        category: "oscillators",
        subcategory: Some("fm"),
        code: include_str!("../../samples/two_op_fm.cpp"),
    },
    BuiltinExample {
        id: "ping-pong-delay",
        title: "Ping-Pong Delay",
        description: "Cross-fed stereo delay lines.",
        category: "effects",
        subcategory: Some("delay"),
        code: include_str!("../../samples/ping_pong_delay.cpp"),
    },
    BuiltinExample {
        id: "ladder-filter",
        title: "Ladder Filter",
        description: "Resonant ladder filter swept by an LFO.",
        category: "effects",
        subcategory: Some("filter"),
        code: include_str!("../../samples/ladder_filter.cpp"),
    },
    BuiltinExample {
        id: "kick-808",
        title: "808 Kick",
        description: "Analog-style kick drum on a steady clock.",
        category: "drums",
        subcategory: None,
        code: include_str!("../../samples/kick_808.cpp"),
    },
];

/// Multi-file examples, appended after every other source
pub const BUILTIN_MULTI_FILE_EXAMPLES: &[BuiltinMultiFileExample] = &[
    BuiltinMultiFileExample {
        id: "fm-poly-synth",
        title: "FM Poly Synth",
        description: "Eight-voice MIDI FM synth with voice stealing.",
        category: "synths",
        subcategory: Some("polyphonic"),
        files: &[
            BuiltinFile {
                path: "main.cpp",
                content: include_str!("../../samples/fm_poly_synth/main.cpp"),
            },
            BuiltinFile {
                path: "voices/FMVoice.hpp",
                content: include_str!("../../samples/fm_poly_synth/voices/FMVoice.hpp"),
            },
        ],
        main_file: "main.cpp",
    },
    BuiltinMultiFileExample {
        id: "step-sequencer",
        title: "Step Sequencer",
        description: "Sixteen-step kick and snare pattern.",
        category: "drums",
        subcategory: None,
        files: &[
            BuiltinFile {
                path: "main.cpp",
                content: include_str!("../../samples/step_sequencer/main.cpp"),
            },
            BuiltinFile {
                path: "sequencer/Pattern.hpp",
                content: include_str!("../../samples/step_sequencer/sequencer/Pattern.hpp"),
            },
        ],
        main_file: "main.cpp",
    },
];

/// Static single-file example
#[derive(Debug, Clone)]
pub struct BuiltinExample {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub subcategory: Option<&'static str>,
    pub code: &'static str,
}

/// Static file of a multi-file example
#[derive(Debug, Clone)]
pub struct BuiltinFile {
    pub path: &'static str,
    pub content: &'static str,
}

/// Static multi-file example
#[derive(Debug, Clone)]
pub struct BuiltinMultiFileExample {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub subcategory: Option<&'static str>,
    pub files: &'static [BuiltinFile],
    pub main_file: &'static str,
}

impl From<&BuiltinExample> for Example {
    fn from(builtin: &BuiltinExample) -> Self {
        Self {
            id: builtin.id.to_string(),
            title: builtin.title.to_string(),
            description: builtin.description.to_string(),
            category: builtin.category.to_string(),
            subcategory: builtin.subcategory.map(str::to_string),
            code: builtin.code.to_string(),
        }
    }
}

impl From<&BuiltinFile> for ExampleFile {
    fn from(builtin: &BuiltinFile) -> Self {
        Self::new(builtin.path, builtin.content)
    }
}

impl From<&BuiltinMultiFileExample> for MultiFileExample {
    fn from(builtin: &BuiltinMultiFileExample) -> Self {
        Self {
            id: builtin.id.to_string(),
            title: builtin.title.to_string(),
            description: builtin.description.to_string(),
            category: builtin.category.to_string(),
            subcategory: builtin.subcategory.map(str::to_string),
            files: builtin.files.iter().map(ExampleFile::from).collect(),
            main_file: builtin.main_file.to_string(),
        }
    }
}

/// Owned copies of the builtin single-file examples
pub fn local_examples() -> Vec<AnyExample> {
    BUILTIN_EXAMPLES
        .iter()
        .map(|b| AnyExample::Single(Example::from(b)))
        .collect()
}

/// Owned copies of the builtin multi-file examples
pub fn local_multi_file_examples() -> Vec<AnyExample> {
    BUILTIN_MULTI_FILE_EXAMPLES
        .iter()
        .map(|b| AnyExample::Multi(MultiFileExample::from(b)))
        .collect()
}
