//! Log events are emitted under the documented filter targets.

use std::io;
use std::sync::Arc;

use multicheck::{CheckOption, MultiCheckboxes, MultiCheckboxesConfig};
use multicheck_core::logging::targets;
use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(output.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    output.text()
}

#[test]
fn test_controller_events_use_controller_target() {
    let output = capture(|| {
        let options = vec![CheckOption::new("Apple", "apple")];
        let mut group = MultiCheckboxes::new(MultiCheckboxesConfig::new(options)).unwrap();
        group.toggle_option("missing", true);
    });

    let warning = output
        .lines()
        .find(|line| line.contains("toggle ignored"))
        .unwrap_or_default();
    assert!(warning.contains("WARN"), "{output}");
    assert!(warning.contains(targets::CONTROLLER), "{output}");
}

#[test]
fn test_partition_events_use_partition_target() {
    let output = capture(|| {
        multicheck::partition(2, &[1, 2, 3]).unwrap();
    });

    let line = output
        .lines()
        .find(|line| line.contains("partitioning slice"))
        .unwrap_or_default();
    assert!(line.contains(targets::PARTITION), "{output}");
}
