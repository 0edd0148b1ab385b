use launcher_extensions::notify::{Notifier, Toast, ToastNotifier};
use launcher_extensions::toast_log::append_toast_log;
use tempfile::tempdir;

#[test]
fn appends_one_line_per_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("toast.log");
    append_toast_log(&path, "first");
    append_toast_log(&path, "second");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" - first"));
    assert!(lines[1].ends_with(" - second"));
}

#[test]
fn notifier_logs_toasts_even_when_disabled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("toast.log");
    let notifier = ToastNotifier::new(false, Some(path.clone()));
    notifier.notify(Toast::failure("Oops! Something went wrong.", "rate limited"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Oops! Something went wrong.: rate limited"));
}

#[test]
fn missing_directory_does_not_panic() {
    let dir = tempdir().unwrap();
    append_toast_log(dir.path().join("missing").join("toast.log"), "msg");
}
