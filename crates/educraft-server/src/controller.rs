//! Drives a [`Session`] through generation.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use educraft_core::{SchoolConfig, Session, SessionError, SessionPhase};
use educraft_genai::ContentGenerator;

use crate::websocket::{EventHub, StudioMessage};

/// Owns one session and the generator that feeds it.
///
/// Cloning shares the same session; the spawned generation task holds a clone.
#[derive(Clone)]
pub struct Controller {
    session: Arc<RwLock<Session>>,
    generator: Arc<dyn ContentGenerator>,
    events: EventHub,
}

impl Controller {
    /// Create a controller with a fresh session.
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            generator,
            events: EventHub::new(),
        }
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// A copy of the current session.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn phase(&self) -> SessionPhase {
        self.session.read().await.phase()
    }

    /// Move to Generating and run the provider call on a background task.
    ///
    /// The state has changed by the time this returns; the task resolves to
    /// the phase the session settled in.
    pub async fn submit(
        &self,
        config: SchoolConfig,
    ) -> Result<JoinHandle<SessionPhase>, SessionError> {
        self.begin(config.clone()).await?;

        let controller = self.clone();
        Ok(tokio::spawn(async move { controller.finish(&config).await }))
    }

    /// Move to Generating and wait for the provider in the current task.
    pub async fn run_to_completion(
        &self,
        config: SchoolConfig,
    ) -> Result<SessionPhase, SessionError> {
        self.begin(config.clone()).await?;
        Ok(self.finish(&config).await)
    }

    /// Previewing → Collecting.
    pub async fn reset(&self) -> Result<(), SessionError> {
        self.session.write().await.reset()?;
        self.notify(SessionPhase::Collecting);
        Ok(())
    }

    async fn begin(&self, config: SchoolConfig) -> Result<(), SessionError> {
        self.session.write().await.submit(config)?;
        self.notify(SessionPhase::Generating);
        Ok(())
    }

    async fn finish(&self, config: &SchoolConfig) -> SessionPhase {
        tracing::debug!(
            "Generating content for {} via {}",
            config.name,
            self.generator.name()
        );

        // The lock is not held across the provider call.
        let result = self.generator.generate(config).await;

        let phase = {
            let mut session = self.session.write().await;
            let outcome = match result {
                Ok(content) => session.succeed(content),
                Err(e) => {
                    tracing::error!("Content generation failed ({}): {}", e.kind(), e);
                    session.fail()
                }
            };
            if let Err(e) = outcome {
                tracing::warn!("Discarding generation result: {}", e);
            }
            session.phase()
        };

        self.notify(phase);
        phase
    }

    fn notify(&self, phase: SessionPhase) {
        tracing::debug!("Session is now {}", phase);
        self.events.send(StudioMessage::StateChanged { phase });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use educraft_core::{
        ConfigForm, FieldUpdate, GeneratedContent, GENERATION_FAILED_MESSAGE,
    };
    use educraft_genai::GenerationError;
    use pretty_assertions::assert_eq;
    use tokio::sync::{oneshot, Mutex};

    fn config() -> SchoolConfig {
        let mut form = ConfigForm::new();
        form.apply(FieldUpdate::Name("Springfield Academy".to_string()));
        form.apply(FieldUpdate::SchoolType("high-school".to_string()));
        form.apply(FieldUpdate::Motto("Excellence in Education".to_string()));
        form.apply(FieldUpdate::Location("Boston, MA".to_string()));
        form.submit().unwrap()
    }

    fn content() -> GeneratedContent {
        GeneratedContent::from_json(include_str!(
            "../../educraft-core/testdata/springfield.json"
        ))
        .unwrap()
    }

    /// Resolves immediately with a fixed outcome.
    enum FakeGenerator {
        Succeeds(GeneratedContent),
        Fails,
    }

    #[async_trait]
    impl ContentGenerator for FakeGenerator {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn generate(
            &self,
            _config: &SchoolConfig,
        ) -> Result<GeneratedContent, GenerationError> {
            match self {
                FakeGenerator::Succeeds(content) => Ok(content.clone()),
                FakeGenerator::Fails => Err(GenerationError::MissingCredential),
            }
        }
    }

    /// Resolves only once the test releases it.
    struct GatedGenerator {
        gate: Mutex<Option<oneshot::Receiver<Result<GeneratedContent, GenerationError>>>>,
    }

    impl GatedGenerator {
        fn new() -> (
            Self,
            oneshot::Sender<Result<GeneratedContent, GenerationError>>,
        ) {
            let (tx, rx) = oneshot::channel();
            (
                Self {
                    gate: Mutex::new(Some(rx)),
                },
                tx,
            )
        }
    }

    #[async_trait]
    impl ContentGenerator for GatedGenerator {
        fn name(&self) -> &'static str {
            "gated"
        }

        async fn generate(
            &self,
            _config: &SchoolConfig,
        ) -> Result<GeneratedContent, GenerationError> {
            let gate = self.gate.lock().await.take();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(GenerationError::Transport("gate dropped".into()))),
                None => Err(GenerationError::Transport("already used".into())),
            }
        }
    }

    #[tokio::test]
    async fn submit_is_observable_before_provider_resolves() {
        let (generator, release) = GatedGenerator::new();
        let controller = Controller::new(Arc::new(generator));

        let task = controller.submit(config()).await.unwrap();

        let session = controller.snapshot().await;
        assert_eq!(session.phase(), SessionPhase::Generating);
        assert_eq!(session.config(), Some(&config()));

        release.send(Ok(content())).unwrap();
        assert_eq!(task.await.unwrap(), SessionPhase::Previewing);

        let session = controller.snapshot().await;
        assert_eq!(session.config(), Some(&config()));
        assert_eq!(session.content(), Some(&content()));
    }

    #[tokio::test]
    async fn rejects_second_submit_while_generating() {
        let (generator, release) = GatedGenerator::new();
        let controller = Controller::new(Arc::new(generator));

        let task = controller.submit(config()).await.unwrap();
        let err = controller.submit(config()).await.unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                from: SessionPhase::Generating,
                action: "submit a configuration",
            }
        );

        release.send(Err(GenerationError::EmptyResponse)).unwrap();
        assert_eq!(task.await.unwrap(), SessionPhase::Collecting);
    }

    #[tokio::test]
    async fn failure_returns_to_collecting_with_message() {
        let controller = Controller::new(Arc::new(FakeGenerator::Fails));

        let phase = controller.run_to_completion(config()).await.unwrap();
        assert_eq!(phase, SessionPhase::Collecting);

        let session = controller.snapshot().await;
        assert_eq!(session.error(), Some(GENERATION_FAILED_MESSAGE));
        assert!(session.config().is_none());
        assert!(session.content().is_none());
    }

    #[tokio::test]
    async fn dropped_provider_counts_as_failure() {
        let (generator, release) = GatedGenerator::new();
        let controller = Controller::new(Arc::new(generator));

        let task = controller.submit(config()).await.unwrap();
        drop(release);

        assert_eq!(task.await.unwrap(), SessionPhase::Collecting);
        assert_eq!(
            controller.snapshot().await.error(),
            Some(GENERATION_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn reset_only_from_previewing() {
        let controller = Controller::new(Arc::new(FakeGenerator::Succeeds(content())));

        assert!(controller.reset().await.is_err());

        controller.run_to_completion(config()).await.unwrap();
        assert_eq!(controller.phase().await, SessionPhase::Previewing);

        controller.reset().await.unwrap();
        assert_eq!(controller.snapshot().await, Session::new());
    }

    #[tokio::test]
    async fn broadcasts_each_transition() {
        let controller = Controller::new(Arc::new(FakeGenerator::Succeeds(content())));
        let mut rx = controller.events().subscribe();

        controller.run_to_completion(config()).await.unwrap();
        controller.reset().await.unwrap();

        let mut phases = Vec::new();
        while let Ok(StudioMessage::StateChanged { phase }) = rx.try_recv() {
            phases.push(phase);
        }
        assert_eq!(
            phases,
            vec![
                SessionPhase::Generating,
                SessionPhase::Previewing,
                SessionPhase::Collecting,
            ]
        );
    }
}
