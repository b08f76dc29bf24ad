use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use atat::blocking::AtatClient;
use atat::AtatCmd;

struct Expectation {
    request: String,
    response: Result<String, atat::Error>,
}

/// Scripted AT client: every exchange must match the next expectation in the
/// queue, which also supplies the canned response. Clones share the queue, so
/// a test can keep scripting after handing the client to a service.
#[derive(Clone, Default)]
pub struct MockAtClient {
    queue: Rc<RefCell<VecDeque<Expectation>>>,
}

impl MockAtClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `cmd` as the next expected exchange, answered with an OK and no
    /// payload.
    pub fn expect<Cmd: AtatCmd>(&self, cmd: &Cmd) {
        self.expect_response(cmd, "");
    }

    /// Queues `cmd` as the next expected exchange, answered with `payload`.
    pub fn expect_response<Cmd: AtatCmd>(&self, cmd: &Cmd, payload: &str) {
        self.queue.borrow_mut().push_back(Expectation {
            request: render(cmd),
            response: Ok(payload.into()),
        });
    }

    /// Queues `cmd` as the next expected exchange, failing it with `error`.
    pub fn expect_error<Cmd: AtatCmd>(&self, cmd: &Cmd, error: atat::Error) {
        self.queue.borrow_mut().push_back(Expectation {
            request: render(cmd),
            response: Err(error),
        });
    }

    /// Asserts that the whole script has been consumed.
    pub fn assert_done(&self) {
        let remaining = self.queue.borrow().len();
        assert_eq!(remaining, 0, "{remaining} expected command(s) never sent");
    }
}

fn render<Cmd: AtatCmd>(cmd: &Cmd) -> String {
    let mut buf = [0u8; 1024];
    let len = cmd.write(&mut buf);
    core::str::from_utf8(&buf[..len])
        .expect("command is not valid UTF-8")
        .to_owned()
}

impl AtatClient for MockAtClient {
    fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        let sent = render(cmd);
        let expectation = self
            .queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected command {sent:?}"));
        assert_eq!(sent, expectation.request);
        match expectation.response {
            Ok(payload) => cmd.parse(Ok(payload.as_bytes())),
            Err(e) => Err(e),
        }
    }
}
