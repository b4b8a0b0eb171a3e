//! Configuration section definitions.
//!
//! Each module corresponds to a section in `postbuild.toml`:
//!
//! | Module     | TOML Section   | Purpose                                |
//! |------------|----------------|----------------------------------------|
//! | `build`    | `[build]`      | Output directory, manifest             |
//! | `meta`     | `[meta]`       | Path marker, title brand, keywords     |
//! | `platform` | `[platform]`   | Edge platform output detection         |
//! | `i18n`     | `[i18n]`       | Translation table override             |

mod build;
mod i18n;
mod meta;
mod platform;

pub use build::BuildConfig;
pub use i18n::I18nConfig;
pub use meta::MetaConfig;
pub use platform::PlatformConfig;
