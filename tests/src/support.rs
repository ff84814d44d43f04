#![cfg(test)]
use scanview_core::summary::{FinalSummary, NetworkTree, PortScanSummary};
use scanview_core::{Interpreter, Interruption, ReportEvent};

pub type Recorder = Interpreter<Vec<ReportEvent>>;

/// Feeds every line, then closes the stream the way end of input does.
pub fn run(log: &[&str]) -> Recorder {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.start().unwrap();
    for line in log {
        interpreter.process_line(line).unwrap();
    }
    interpreter.finish(Interruption::EndOfInput).unwrap();
    interpreter
}

pub fn events(interpreter: &Recorder) -> &[ReportEvent] {
    interpreter.sink()
}

pub fn final_summary(interpreter: &Recorder) -> &FinalSummary {
    events(interpreter)
        .iter()
        .find_map(|event| match event {
            ReportEvent::FinalSummary(summary) => Some(summary),
            _ => None,
        })
        .expect("report has a final summary")
}

pub fn network_tree(interpreter: &Recorder) -> &NetworkTree {
    events(interpreter)
        .iter()
        .find_map(|event| match event {
            ReportEvent::NetworkTree(tree) => Some(tree),
            _ => None,
        })
        .expect("report has a network tree")
}

pub fn port_scan_summary(interpreter: &Recorder) -> Option<&PortScanSummary> {
    events(interpreter).iter().find_map(|event| match event {
        ReportEvent::PortScanComplete(summary) => Some(summary),
        _ => None,
    })
}

/// Index of the first event matching `pred`.
pub fn position(interpreter: &Recorder, pred: impl Fn(&ReportEvent) -> bool) -> usize {
    events(interpreter)
        .iter()
        .position(pred)
        .expect("event present in report")
}

pub fn count(interpreter: &Recorder, pred: impl Fn(&ReportEvent) -> bool) -> usize {
    events(interpreter).iter().filter(|event| pred(event)).count()
}
