use super::*;

#[test]
fn buffer_handler_appends_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.println("");
    assert_eq!(handler.output(), "hello\n\n");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    assert_eq!(handler.output(), "");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.output(), "");
}

#[test]
fn shared_handler_sees_writes_through_clones() {
    let handler = buffer_handler();
    let writer = Arc::clone(&handler);
    writer.println("from a clone");
    assert_eq!(handler.output(), "from a clone\n");
}
