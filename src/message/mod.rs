#![doc = r#"
Wire-level messages found inside track chunks

# Hierarchy
```text
                    |--------------|
                    | TrackMessage |
                    |--------------|
                   /       |        \
|-----------------------| |------| |-------------|
| Channel Voice Message | | Meta | | System Excl.|
|-----------------------| |------| |-------------|
```

Meta events live in [`crate::file::meta`] since they only exist in files.
"#]

mod channel;
pub use channel::*;

mod sysex;
pub use sysex::*;
