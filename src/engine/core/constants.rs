// Option tables shared by the compiler and the form descriptors - single source of truth
// (value, label) pairs in display order; the first entry is not necessarily the default,
// see OptionCatalog for the designated defaults.

// NVENC quality presets
pub const NVENC_PRESETS: &[(&str, &str)] = &[
    ("p1", "Fastest (P1)"),
    ("p2", "Faster (P2)"),
    ("p3", "Fast (P3)"),
    ("p4", "Medium (P4) - Balanced performance and quality"),
    ("p5", "Slow (P5)"),
    ("p6", "Slower (P6)"),
    ("p7", "Slowest (P7)"),
];

// Tune modes ("auto" applies no tune)
pub const NVENC_TUNES: &[(&str, &str)] = &[
    ("auto", "Disabled – Do not apply any tune"),
    ("hq", "HQ – High quality (ffmpeg default)"),
    ("ll", "LL – Low latency"),
    ("ull", "ULL – Ultra low latency"),
    ("lossless", "Lossless"),
];

// Codec profiles
pub const NVENC_PROFILES: &[(&str, &str)] = &[
    (
        "auto",
        "Auto – Let ffmpeg automatically select the required profile (recommended)",
    ),
    ("baseline", "Baseline"),
    ("main", "Main"),
    ("high", "High"),
    ("high444p", "High444p"),
];

// Pixel formats
pub const PIX_FMTS: &[(&str, &str)] = &[
    (
        "auto",
        "Auto – Let ffmpeg automatically select the required pixel format (recommended)",
    ),
    (
        "yuv420p",
        "yuv420p - 4:2:0 chroma subsampling (commonly used in H.264)",
    ),
    ("yuv422p", "yuv422p - 4:2:2 chroma subsampling"),
    ("yuv444p", "yuv444p - 4:4:4 chroma subsampling, no subsampling"),
    (
        "nv12",
        "nv12 - A variation of YUV 4:2:0 with a different layout, often used in hardware-accelerated encoding paths",
    ),
    (
        "p010le",
        "p010le - A 10-bit YUV 4:2:0 format, often used for high dynamic range (HDR) content",
    ),
    (
        "p016le",
        "p016le - A 10-bit version of YUV 4:2:0, similar to p010le but with different bit depth handling",
    ),
    ("yuv420p10le", "yuv420p10le - A 10-bit version of YUV 4:2:0"),
    (
        "yuv444p16le",
        "yuv444p16le - A 16-bit version of YUV 4:4:4, offering very high color fidelity",
    ),
];

// Rate control overrides ("auto" keeps the preset's own rate control)
pub const RC_METHODS: &[(&str, &str)] = &[
    (
        "auto",
        "Disabled – Do not override the RC setting pre-defined in the preset option (recommended)",
    ),
    ("constqp", "CQP - Quality based mode using constant quantizer scale"),
    ("vbr", "VBR - Bitrate based mode using variable bitrate"),
    ("vbr_hq", "VBR HQ - High Quality VBR mode"),
    ("cbr", "CBR - Bitrate based mode using constant bitrate"),
    ("cbr_hq", "CBR HQ - High Quality CBR mode"),
];

// Hardware decoding methods
pub const DECODING_METHODS: &[(&str, &str)] = &[
    (
        "cpu",
        "Disabled - Use CPU to decode of video source (provides best compatibility)",
    ),
    (
        "cuda",
        "CUDA - Use NVIDIA CUDA for decoding the video source (best compatibility with older GPUs)",
    ),
    ("nvdec", "NVDEC - Use the GPUs dedicated video decoder"),
];

// Configuration modes
pub const MODES: &[(&str, &str)] = &[
    ("basic", "Basic - Use safe encoder defaults"),
    ("standard", "Standard - Configure every encoder option"),
];

// Sentinel shown when no device could be discovered
pub const NO_DEVICE: (&str, &str) = ("none", "No NVIDIA devices available");

// Slider bounds (inclusive)
pub const RC_LOOKAHEAD_RANGE: (i64, i64) = (0, 30);
pub const AQ_STRENGTH_RANGE: (i64, i64) = (0, 15);
