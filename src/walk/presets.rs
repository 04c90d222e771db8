//! Common media extension lists, usable with [`ExtensionFilter::from_preset`]
//!
//! [`ExtensionFilter::from_preset`]: super::ExtensionFilter::from_preset

pub const AUDIO: &[&str] = &[
    ".mp3", ".aac", ".ogg", ".flac", ".wav", ".aiff", ".dsd", ".pcm",
];

pub const IMAGE: &[&str] = &[
    ".jpg", ".png", ".jpeg", ".webp", ".gif", ".bmp", ".tif", ".tiff", ".jfif", ".heic", ".dib",
    ".jp2", ".jpx", ".j2k", ".jxl",
];

pub const VIDEO: &[&str] = &[
    ".mp4", ".mkv", ".avi", ".flv", ".mov", ".webm", ".mpg", ".mpeg", ".mpe", ".mpv", ".ogg",
    ".m4p", ".m4v", ".wmv", ".f4v", ".swf",
];
