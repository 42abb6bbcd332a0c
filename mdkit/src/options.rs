/*!
Renderer options shared with the primitives.

Only sanitizing lives here at the moment. Sanitizing rendered HTML by escaping raw HTML blocks is deprecated in favor of running a dedicated HTML sanitizer on the output; [`check_sanitize_deprecation()`] reports the use of it through [`tracing`].
*/
use bon::Builder;

/// ## Example
/// ```
/// use mdkit::options::SanitizeOptions;
///
/// let options = SanitizeOptions::builder().sanitize(true).build();
/// assert!(options.sanitize);
/// assert!(!options.silent);
/// ```
#[derive(Builder, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Escape raw HTML and [reject dangerous link targets](crate::url::clean_url).
    #[builder(default)]
    pub sanitize: bool,
    /// Do not warn about deprecated options.
    #[builder(default)]
    pub silent: bool,
}

/// Warn once per call if the deprecated `sanitize` option is set and `silent` is not.
///
/// Returns whether a warning was emitted.
///
/// ## Example
/// ```
/// use mdkit::options::{check_sanitize_deprecation, SanitizeOptions};
///
/// assert!(check_sanitize_deprecation(&SanitizeOptions::builder().sanitize(true).build()));
/// assert!(!check_sanitize_deprecation(&SanitizeOptions::builder().sanitize(true).silent(true).build()));
/// assert!(!check_sanitize_deprecation(&SanitizeOptions::default()));
/// ```
pub fn check_sanitize_deprecation(options: &SanitizeOptions) -> bool {
    if options.sanitize && !options.silent {
        tracing::warn!(
            "the sanitize option is deprecated and will be removed in the future, \
             sanitize the rendered HTML with a dedicated HTML sanitizer instead"
        );
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn warns() {
        let logs = captured_logs(|| {
            assert!(check_sanitize_deprecation(
                &SanitizeOptions::builder().sanitize(true).build()
            ));
        });
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("sanitize option is deprecated"), "{logs}");
    }

    #[test]
    fn silent() {
        let logs = captured_logs(|| {
            assert!(!check_sanitize_deprecation(
                &SanitizeOptions::builder().sanitize(true).silent(true).build()
            ));
            assert!(!check_sanitize_deprecation(&SanitizeOptions::default()));
        });
        assert!(logs.is_empty(), "{logs}");
    }
}
