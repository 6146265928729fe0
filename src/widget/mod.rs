//! Task submission widget.
//!
//! Drives the panel's modal dialog: open/close visibility, task text
//! validation, and submission to the agent endpoint. The widget owns no
//! page machinery itself. The host injects the element handles, the
//! notifier, and the transport through [`TaskWidget::builder`], which
//! keeps the component testable against synthetic handles.
//!
//! Submissions run on the host's event loop without mutual exclusion:
//! several may be in flight at once, and each response touches the
//! input field and notifier only when it resolves.

pub mod notify;
pub mod surface;
pub mod transport;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use self::notify::Notifier;
use self::surface::{ModalSurface, PointerTarget, TaskInput, Visibility};
use self::transport::TaskTransport;

/// Shown when the task text is blank after trimming.
const MSG_EMPTY_TASK: &str = "Please enter a task!";

/// Shown when the submission fails; detail goes to the log only.
const MSG_LAUNCH_FAILED: &str = "Failed to launch agent. See the log for details.";

/// Raised when the widget is assembled without one of its collaborators.
///
/// Mirrors the page contract: a missing element makes the wiring fail
/// outright instead of producing a half-bound widget.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required widget element: {0}")]
pub struct MissingElement(pub &'static str);

/// Outcome of a single submit activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank after trimming; nothing was sent.
    Rejected,
    /// The server acknowledged the task.
    Launched,
    /// The request failed; the task was not acknowledged.
    Failed,
}

/// The dialog component: open/close state plus task submission.
pub struct TaskWidget {
    modal: Arc<dyn ModalSurface>,
    input: Arc<dyn TaskInput>,
    notifier: Arc<dyn Notifier>,
    transport: Arc<dyn TaskTransport>,
}

impl std::fmt::Debug for TaskWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskWidget").finish_non_exhaustive()
    }
}

impl TaskWidget {
    pub fn builder() -> TaskWidgetBuilder {
        TaskWidgetBuilder::default()
    }

    /// Open the dialog.
    pub fn open(&self) {
        self.modal.set_visibility(Visibility::Open);
    }

    /// Close the dialog, whatever its current state.
    pub fn close(&self) {
        self.modal.set_visibility(Visibility::Closed);
    }

    /// React to a pointer activation on the page overlay.
    ///
    /// Only an activation landing on the backdrop itself closes the
    /// dialog; activations inside the content area are ignored.
    pub fn pointer_activated(&self, target: PointerTarget) {
        if target == PointerTarget::Backdrop {
            self.close();
        }
    }

    /// Submit the current input as a task.
    ///
    /// The dialog stays open on every path, so the user can fire off
    /// multiple agents without reopening it. The input field is cleared
    /// only once the server has acknowledged the task.
    pub async fn submit(&self) -> SubmitOutcome {
        let task = self.input.value().trim().to_string();
        if task.is_empty() {
            self.notifier.notify(MSG_EMPTY_TASK);
            return SubmitOutcome::Rejected;
        }

        debug!("Sending task to agent launcher: {}", task);

        match self.transport.submit(&task).await {
            Ok(response) => {
                debug!("Server response: {}", response);
                self.notifier
                    .notify(&format!("Agent for task \"{}\" launched!", task));
                self.input.clear();
                SubmitOutcome::Launched
            }
            Err(e) => {
                error!("Task submission failed: {}", e);
                self.notifier.notify(MSG_LAUNCH_FAILED);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Assembles a [`TaskWidget`] from its injected collaborators.
///
/// Every handle is required; [`build`](TaskWidgetBuilder::build) fails
/// naming the first absent one.
#[derive(Default)]
pub struct TaskWidgetBuilder {
    modal: Option<Arc<dyn ModalSurface>>,
    input: Option<Arc<dyn TaskInput>>,
    notifier: Option<Arc<dyn Notifier>>,
    transport: Option<Arc<dyn TaskTransport>>,
}

impl TaskWidgetBuilder {
    pub fn modal(mut self, modal: Arc<dyn ModalSurface>) -> Self {
        self.modal = Some(modal);
        self
    }

    pub fn input(mut self, input: Arc<dyn TaskInput>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn TaskTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<TaskWidget, MissingElement> {
        Ok(TaskWidget {
            modal: self.modal.ok_or(MissingElement("modal"))?,
            input: self.input.ok_or(MissingElement("task input"))?,
            notifier: self.notifier.ok_or(MissingElement("notifier"))?,
            transport: self.transport.ok_or(MissingElement("transport"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::transport::TransportError;
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::Semaphore;

    struct FakeModal {
        state: Mutex<Visibility>,
    }

    impl FakeModal {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                state: Mutex::new(Visibility::Closed),
            })
        }
    }

    impl ModalSurface for FakeModal {
        fn set_visibility(&self, visibility: Visibility) {
            *self.state.lock().unwrap() = visibility;
        }

        fn visibility(&self) -> Visibility {
            *self.state.lock().unwrap()
        }
    }

    struct FakeInput {
        value: Mutex<String>,
    }

    impl FakeInput {
        fn with_text(text: &str) -> Arc<Self> {
            Arc::new(Self {
                value: Mutex::new(text.to_string()),
            })
        }

        fn type_text(&self, text: &str) {
            *self.value.lock().unwrap() = text.to_string();
        }
    }

    impl TaskInput for FakeInput {
        fn value(&self) -> String {
            self.value.lock().unwrap().clone()
        }

        fn clear(&self) {
            self.value.lock().unwrap().clear();
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    /// Transport fed with canned results; panics on an unexpected call.
    #[derive(Default)]
    struct StubTransport {
        calls: Mutex<Vec<String>>,
        results: Mutex<VecDeque<Result<Value, TransportError>>>,
    }

    impl StubTransport {
        fn respond_with(result: Result<Value, TransportError>) -> Arc<Self> {
            let stub = Self::default();
            stub.results.lock().unwrap().push_back(result);
            Arc::new(stub)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TaskTransport for StubTransport {
        async fn submit(&self, task: &str) -> Result<Value, TransportError> {
            self.calls.lock().unwrap().push(task.to_string());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected transport call")
        }
    }

    /// Transport that blocks each call until the test releases a permit,
    /// so overlapping submissions can be exercised.
    struct GatedTransport {
        calls: Mutex<Vec<String>>,
        gate: Semaphore,
    }

    impl GatedTransport {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                gate: Semaphore::new(0),
            })
        }
    }

    #[async_trait]
    impl TaskTransport for GatedTransport {
        async fn submit(&self, task: &str) -> Result<Value, TransportError> {
            self.calls.lock().unwrap().push(task.to_string());
            let _permit = self.gate.acquire().await.unwrap();
            Ok(json!({ "status": "success" }))
        }
    }

    struct Fixture {
        modal: Arc<FakeModal>,
        input: Arc<FakeInput>,
        notifier: Arc<RecordingNotifier>,
    }

    impl Fixture {
        fn widget(&self, transport: Arc<dyn TaskTransport>) -> TaskWidget {
            TaskWidget::builder()
                .modal(self.modal.clone())
                .input(self.input.clone())
                .notifier(self.notifier.clone())
                .transport(transport)
                .build()
                .unwrap()
        }
    }

    fn fixture(text: &str) -> Fixture {
        Fixture {
            modal: FakeModal::new(),
            input: FakeInput::with_text(text),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    #[test]
    fn builder_requires_every_collaborator() {
        let err = TaskWidget::builder().build().unwrap_err();
        assert_eq!(err, MissingElement("modal"));

        let err = TaskWidget::builder()
            .modal(FakeModal::new())
            .build()
            .unwrap_err();
        assert_eq!(err, MissingElement("task input"));
    }

    #[test]
    fn open_and_close_toggle_visibility() {
        let fx = fixture("");
        let widget = fx.widget(Arc::new(StubTransport::default()));

        widget.open();
        assert_eq!(fx.modal.visibility(), Visibility::Open);

        widget.close();
        assert_eq!(fx.modal.visibility(), Visibility::Closed);

        // Close is unconditional, whatever the prior state.
        widget.close();
        assert_eq!(fx.modal.visibility(), Visibility::Closed);
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let fx = fixture("");
        let widget = fx.widget(Arc::new(StubTransport::default()));

        widget.open();
        widget.pointer_activated(PointerTarget::Content);
        assert_eq!(fx.modal.visibility(), Visibility::Open);

        widget.pointer_activated(PointerTarget::Backdrop);
        assert_eq!(fx.modal.visibility(), Visibility::Closed);
    }

    #[test]
    fn blank_input_is_rejected_without_io() {
        for text in ["", "   ", "\t \n"] {
            let fx = fixture(text);
            let transport = Arc::new(StubTransport::default());
            let widget = fx.widget(transport.clone());
            widget.open();

            let outcome = tokio_test::block_on(widget.submit());

            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert_eq!(fx.notifier.messages(), vec![MSG_EMPTY_TASK.to_string()]);
            assert!(transport.calls().is_empty());
            // Dialog stays open and the input is untouched.
            assert_eq!(fx.modal.visibility(), Visibility::Open);
            assert_eq!(fx.input.value(), text);
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_sending() {
        let fx = fixture("  buy milk  ");
        let transport = StubTransport::respond_with(Ok(json!({ "status": "success" })));
        let widget = fx.widget(transport.clone());

        let outcome = tokio_test::block_on(widget.submit());

        assert_eq!(outcome, SubmitOutcome::Launched);
        assert_eq!(transport.calls(), vec!["buy milk".to_string()]);
    }

    #[test]
    fn successful_submit_notifies_and_clears_input() {
        let fx = fixture("refactor login module");
        let transport = StubTransport::respond_with(Ok(json!({
            "status": "success",
            "message": "Agent for task 'refactor login module' launched."
        })));
        let widget = fx.widget(transport.clone());
        widget.open();

        let outcome = tokio_test::block_on(widget.submit());

        assert_eq!(outcome, SubmitOutcome::Launched);
        assert_eq!(transport.calls(), vec!["refactor login module".to_string()]);

        let messages = fx.notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("refactor login module"));

        assert_eq!(fx.input.value(), "");
        // The dialog is intentionally left open for follow-up tasks.
        assert_eq!(fx.modal.visibility(), Visibility::Open);
    }

    #[test]
    fn failed_submit_keeps_input_and_reports_error() {
        let fx = fixture("deploy the fix");
        let transport = StubTransport::respond_with(Err(TransportError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }));
        let widget = fx.widget(transport.clone());

        let outcome = tokio_test::block_on(widget.submit());

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(fx.notifier.messages(), vec![MSG_LAUNCH_FAILED.to_string()]);
        assert_eq!(fx.input.value(), "deploy the fix");
    }

    #[tokio::test]
    async fn overlapping_submits_resolve_independently() {
        let fx = fixture("alpha");
        let transport = GatedTransport::new();
        let widget = Arc::new(fx.widget(transport.clone()));

        let first = tokio::spawn({
            let widget = Arc::clone(&widget);
            async move { widget.submit().await }
        });

        // Wait until the first submission has read the input and is
        // suspended in its transport call.
        while transport.calls.lock().unwrap().is_empty() {
            tokio::task::yield_now().await;
        }

        fx.input.type_text("beta");
        let second = tokio::spawn({
            let widget = Arc::clone(&widget);
            async move { widget.submit().await }
        });

        while transport.calls.lock().unwrap().len() < 2 {
            tokio::task::yield_now().await;
        }

        transport.gate.add_permits(2);

        assert_eq!(first.await.unwrap(), SubmitOutcome::Launched);
        assert_eq!(second.await.unwrap(), SubmitOutcome::Launched);
        assert_eq!(
            transport.calls.lock().unwrap().clone(),
            vec!["alpha".to_string(), "beta".to_string()]
        );
        assert_eq!(fx.input.value(), "");
    }
}
