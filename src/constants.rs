//! Common constants used throughout rena.

/// Characters accepted as the field separator of a command
pub const SEPARATORS: [char; 5] = [',', ';', '/', '|', '\t'];

/// Case-insensitive modifier prepended to patterns without the `m` flag
pub const CASE_INSENSITIVE_PREFIX: &str = "(?i)";

/// Flag letters
pub const FLAG_MATCH_CASE: char = 'm';
pub const FLAG_REGEX: char = 'r';
pub const FLAG_KEEP_WHITESPACE: char = 'w';

/// Device names Windows refuses as a file stem
pub const WINDOWS_RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters Windows refuses in a file name
pub const WINDOWS_FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
