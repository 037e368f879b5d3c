use std::time::Duration;

use eyre::{Result, WrapErr};
use futures::stream::{BoxStream, StreamExt};
use spotbot_psql::model::SightingScope;
use spotbot_util::{
    constants::{GENERAL_ISSUE, NOT_YOUR_BUTTONS},
    MessageBuilder,
};
use tokio::{
    task::JoinHandle,
    time::{timeout_at, Instant},
};
use twilight_model::id::{marker::UserMarker, Id};

use super::{PageAction, Pages};
use crate::{
    active::{ComponentPress, MessageHandle, Presenter, SightingSource},
    core::SightingsConfig,
    embeds::{EmbedData, SightingsEmbed},
};

pub const NO_SIGHTINGS: &str =
    "Je hebt nog geen spots! Gebruik `/kt <kenteken>` om je eerste voertuig te spotten.";

/// Button-driven browsing through the sightings of a scope.
///
/// Each session runs on its own task and processes presses one at a time.
/// Only the invoking user may navigate; once no page has been rendered for
/// the configured timeout, the buttons are disabled and the session ends.
pub struct SightingsPagination<S, P> {
    source: S,
    presenter: P,
    owner: Id<UserMarker>,
    scope: SightingScope,
    pages: Pages,
    total: u64,
    timeout: Duration,
}

impl<S: SightingSource, P: Presenter> SightingsPagination<S, P> {
    /// Show the first page and spawn the task that handles button presses.
    ///
    /// If the scope has no sightings, a notice is shown instead and no task
    /// is spawned.
    pub async fn begin(
        source: S,
        presenter: P,
        owner: Id<UserMarker>,
        scope: SightingScope,
        config: SightingsConfig,
    ) -> Result<Option<JoinHandle<()>>> {
        let total = source
            .count(scope)
            .await
            .wrap_err("Failed to count sightings")?;

        if total == 0 {
            let builder = MessageBuilder::new().content(NO_SIGHTINGS);
            presenter.show(builder).await?;

            return Ok(None);
        }

        let pagination = Self {
            source,
            presenter,
            owner,
            scope,
            pages: Pages::new(config.per_page, total),
            total,
            timeout: config.timeout,
        };

        let builder = pagination.build_page(&pagination.pages).await?;
        let handle = pagination.presenter.show(builder).await?;
        let presses = pagination.presenter.subscribe(handle);

        Ok(Some(tokio::spawn(pagination.run(handle, presses))))
    }

    async fn build_page(&self, pages: &Pages) -> Result<MessageBuilder<'static>> {
        let sightings = self
            .source
            .page(self.scope, pages.offset(), pages.per_page())
            .await
            .wrap_err("Failed to fetch sightings")?;

        let embed = SightingsEmbed::new(&sightings, pages, self.total, self.scope);

        let builder = MessageBuilder::new()
            .embed(embed.build())
            .components(pages.components());

        Ok(builder)
    }

    async fn run(mut self, handle: MessageHandle, mut presses: BoxStream<'static, ComponentPress>) {
        let mut deadline = Instant::now() + self.timeout;

        loop {
            let press = match timeout_at(deadline, presses.next()).await {
                Ok(Some(press)) => press,
                // Shutting down
                Ok(None) => return,
                Err(_) => break,
            };

            self.handle_press(&press, &mut deadline).await;
        }

        if let Err(err) = self
            .presenter
            .disable(handle, Pages::disabled_components())
            .await
        {
            warn!(?err, "Failed to disable sightings pagination");
        }
    }

    async fn handle_press(&mut self, press: &ComponentPress, deadline: &mut Instant) {
        if press.user_id != self.owner {
            if let Err(err) = self.presenter.reject(press, NOT_YOUR_BUTTONS).await {
                warn!(?err, "Failed to reject foreign button press");
            }

            return;
        }

        let Some(action) = PageAction::from_custom_id(&press.custom_id) else {
            warn!(custom_id = %press.custom_id, "Unknown sightings component");

            if let Err(err) = self.presenter.acknowledge(press).await {
                warn!(?err, "Failed to acknowledge unknown component");
            }

            return;
        };

        // Only commit the new page once it's on display
        let mut pages = self.pages;
        pages.update(action);

        let builder = match self.build_page(&pages).await {
            Ok(builder) => builder,
            Err(err) => {
                error!(?err, "Failed to build sightings page");

                if let Err(err) = self.presenter.reject(press, GENERAL_ISSUE).await {
                    warn!(?err, "Failed to respond to failed page build");
                }

                return;
            }
        };

        match self.presenter.update(press, builder).await {
            Ok(_) => {
                self.pages = pages;
                *deadline = Instant::now() + self.timeout;
            }
            Err(err) => warn!(?err, "Failed to update sightings page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures::{
        channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
        future::{self, BoxFuture},
    };
    use spotbot_psql::model::Sighting;
    use time::OffsetDateTime;
    use twilight_model::{
        channel::message::Component,
        id::marker::{ChannelMarker, MessageMarker},
    };

    use super::*;

    const OWNER: Id<UserMarker> = Id::new(1);
    const STRANGER: Id<UserMarker> = Id::new(2);
    const TIMEOUT: Duration = Duration::from_secs(300);

    fn handle() -> MessageHandle {
        MessageHandle {
            channel_id: Id::<ChannelMarker>::new(10),
            message_id: Id::<MessageMarker>::new(20),
        }
    }

    struct FakeSource {
        total: u64,
        fetches: Mutex<Vec<(usize, usize)>>,
        fail_fetch: Option<usize>,
    }

    impl FakeSource {
        fn new(total: u64) -> Arc<Self> {
            Arc::new(Self {
                total,
                fetches: Mutex::new(Vec::new()),
                fail_fetch: None,
            })
        }

        /// The `n`th fetch, counting from zero, fails.
        fn failing(total: u64, n: usize) -> Arc<Self> {
            Arc::new(Self {
                total,
                fetches: Mutex::new(Vec::new()),
                fail_fetch: Some(n),
            })
        }

        fn fetches(&self) -> Vec<(usize, usize)> {
            self.fetches.lock().unwrap().clone()
        }
    }

    impl SightingSource for FakeSource {
        fn count(&self, _: SightingScope) -> BoxFuture<'_, Result<u64>> {
            Box::pin(future::ready(Ok(self.total)))
        }

        fn page(
            &self,
            _: SightingScope,
            offset: usize,
            limit: usize,
        ) -> BoxFuture<'_, Result<Vec<Sighting>>> {
            let mut fetches = self.fetches.lock().unwrap();
            let n = fetches.len();
            fetches.push((offset, limit));

            if self.fail_fetch == Some(n) {
                return Box::pin(future::ready(Err(eyre!("connection reset"))));
            }

            let end = (self.total as usize).min(offset + limit);

            let sightings = (offset..end)
                .map(|i| Sighting {
                    sighting_id: i as i64,
                    license: format!("{:0>2}ABC1", i),
                    comment: None,
                    created_at: OffsetDateTime::UNIX_EPOCH,
                    user_id: OWNER,
                    guild_id: None,
                    vehicle: None,
                })
                .collect();

            Box::pin(future::ready(Ok(sightings)))
        }
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Show { description: Option<String> },
        Update { description: Option<String> },
        Acknowledge,
        Reject { user: Id<UserMarker>, content: String },
        Disable,
    }

    struct FakePresenter {
        calls: Mutex<Vec<Call>>,
        presses: Mutex<Option<UnboundedReceiver<ComponentPress>>>,
        fail_disable: bool,
    }

    impl FakePresenter {
        fn new(fail_disable: bool) -> (Arc<Self>, UnboundedSender<ComponentPress>) {
            let (tx, rx) = mpsc::unbounded();

            let presenter = Self {
                calls: Mutex::new(Vec::new()),
                presses: Mutex::new(Some(rx)),
                fail_disable,
            };

            (Arc::new(presenter), tx)
        }

        fn take_calls(&self) -> Vec<Call> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }
    }

    fn description(builder: &MessageBuilder<'_>) -> Option<String> {
        builder
            .embed
            .as_ref()
            .and_then(|embed| embed.description.clone())
            .or_else(|| builder.content.as_deref().map(str::to_owned))
    }

    impl Presenter for Arc<FakePresenter> {
        fn show(&self, builder: MessageBuilder<'static>) -> BoxFuture<'_, Result<MessageHandle>> {
            let description = description(&builder);
            self.calls.lock().unwrap().push(Call::Show { description });

            Box::pin(future::ready(Ok(handle())))
        }

        fn subscribe(&self, _: MessageHandle) -> BoxStream<'static, ComponentPress> {
            self.presses
                .lock()
                .unwrap()
                .take()
                .expect("subscribed twice")
                .boxed()
        }

        fn update<'a>(
            &'a self,
            _: &'a ComponentPress,
            builder: MessageBuilder<'static>,
        ) -> BoxFuture<'a, Result<()>> {
            let description = description(&builder);
            self.calls.lock().unwrap().push(Call::Update { description });

            Box::pin(future::ready(Ok(())))
        }

        fn acknowledge<'a>(&'a self, _: &'a ComponentPress) -> BoxFuture<'a, Result<()>> {
            self.calls.lock().unwrap().push(Call::Acknowledge);

            Box::pin(future::ready(Ok(())))
        }

        fn reject<'a>(
            &'a self,
            press: &'a ComponentPress,
            content: &'a str,
        ) -> BoxFuture<'a, Result<()>> {
            let call = Call::Reject {
                user: press.user_id,
                content: content.to_owned(),
            };

            self.calls.lock().unwrap().push(call);

            Box::pin(future::ready(Ok(())))
        }

        fn disable(
            &self,
            _: MessageHandle,
            components: Vec<Component>,
        ) -> BoxFuture<'_, Result<()>> {
            assert_eq!(components, Pages::disabled_components());
            self.calls.lock().unwrap().push(Call::Disable);

            let res = if self.fail_disable {
                Err(eyre!("Unknown Message"))
            } else {
                Ok(())
            };

            Box::pin(future::ready(res))
        }
    }

    fn press(user_id: Id<UserMarker>, action: PageAction) -> ComponentPress {
        ComponentPress {
            id: Id::new(99),
            token: "token".to_owned(),
            user_id,
            custom_id: action.custom_id().to_owned(),
        }
    }

    fn config() -> SightingsConfig {
        SightingsConfig {
            per_page: 5,
            timeout: TIMEOUT,
            ..Default::default()
        }
    }

    fn page_description(page: usize) -> Option<String> {
        Some(format!("Persoonlijke spots - Pagina {page} van 3 (12 totaal)"))
    }

    async fn begin(
        source: &Arc<FakeSource>,
        presenter: &Arc<FakePresenter>,
    ) -> Option<JoinHandle<()>> {
        let scope = SightingScope::User(OWNER);

        SightingsPagination::begin(
            Arc::clone(source),
            Arc::clone(presenter),
            OWNER,
            scope,
            config(),
        )
        .await
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn no_sightings_shows_notice() {
        let source = FakeSource::new(0);
        let (presenter, _tx) = FakePresenter::new(false);

        assert!(begin(&source, &presenter).await.is_none());
        assert!(source.fetches().is_empty());
        assert_eq!(
            presenter.take_calls(),
            [Call::Show {
                description: Some(NO_SIGHTINGS.to_owned())
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn navigates_twelve_sightings() {
        let source = FakeSource::new(12);
        let (presenter, tx) = FakePresenter::new(false);

        let task = begin(&source, &presenter).await.unwrap();

        tx.unbounded_send(press(OWNER, PageAction::Next)).unwrap();
        tx.unbounded_send(press(OWNER, PageAction::Last)).unwrap();
        tx.unbounded_send(press(OWNER, PageAction::Next)).unwrap();
        tx.unbounded_send(press(OWNER, PageAction::First)).unwrap();

        task.await.unwrap();

        assert_eq!(source.fetches(), [(0, 5), (5, 5), (10, 5), (10, 5), (0, 5)]);
        assert_eq!(
            presenter.take_calls(),
            [
                Call::Show {
                    description: page_description(1)
                },
                Call::Update {
                    description: page_description(2)
                },
                Call::Update {
                    description: page_description(3)
                },
                Call::Update {
                    description: page_description(3)
                },
                Call::Update {
                    description: page_description(1)
                },
                Call::Disable,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_other_users() {
        let source = FakeSource::new(12);
        let (presenter, tx) = FakePresenter::new(false);

        let task = begin(&source, &presenter).await.unwrap();

        tx.unbounded_send(press(STRANGER, PageAction::Next)).unwrap();
        tx.unbounded_send(press(OWNER, PageAction::Next)).unwrap();

        task.await.unwrap();

        assert_eq!(source.fetches(), [(0, 5), (5, 5)]);
        assert_eq!(
            presenter.take_calls(),
            [
                Call::Show {
                    description: page_description(1)
                },
                Call::Reject {
                    user: STRANGER,
                    content: NOT_YOUR_BUTTONS.to_owned(),
                },
                Call::Update {
                    description: page_description(2)
                },
                Call::Disable,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_disables_once_and_swallows_failure() {
        let source = FakeSource::new(12);
        let (presenter, tx) = FakePresenter::new(true);

        let task = begin(&source, &presenter).await.unwrap();
        let start = Instant::now();

        task.await.unwrap();

        assert!(start.elapsed() >= TIMEOUT);
        assert_eq!(
            presenter.take_calls(),
            [
                Call::Show {
                    description: page_description(1)
                },
                Call::Disable,
            ]
        );

        // Session is gone, later presses go nowhere
        assert!(tx.unbounded_send(press(OWNER, PageAction::Next)).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_counts_from_last_render() {
        let source = FakeSource::new(12);
        let (presenter, tx) = FakePresenter::new(false);

        let task = begin(&source, &presenter).await.unwrap();
        let start = Instant::now();

        tokio::time::sleep(Duration::from_secs(200)).await;
        tx.unbounded_send(press(OWNER, PageAction::Next)).unwrap();

        tokio::time::sleep(Duration::from_secs(200)).await;
        tx.unbounded_send(press(STRANGER, PageAction::Next)).unwrap();

        task.await.unwrap();

        // Expires 300s after the owner's press, the stranger did not extend it
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(500));
        assert!(elapsed < Duration::from_secs(700));
        assert_eq!(presenter.take_calls().last(), Some(&Call::Disable));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_stream_ends_without_disabling() {
        let source = FakeSource::new(12);
        let (presenter, tx) = FakePresenter::new(false);

        let task = begin(&source, &presenter).await.unwrap();
        drop(tx);
        task.await.unwrap();

        assert_eq!(
            presenter.take_calls(),
            [Call::Show {
                description: page_description(1)
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_keeps_current_page() {
        // Fetches: initial page, then the first press fails
        let source = FakeSource::failing(12, 1);
        let (presenter, tx) = FakePresenter::new(false);

        let task = begin(&source, &presenter).await.unwrap();

        tx.unbounded_send(press(OWNER, PageAction::Next)).unwrap();
        tx.unbounded_send(press(OWNER, PageAction::Next)).unwrap();

        task.await.unwrap();

        assert_eq!(source.fetches(), [(0, 5), (5, 5), (5, 5)]);
        assert_eq!(
            presenter.take_calls(),
            [
                Call::Show {
                    description: page_description(1)
                },
                Call::Reject {
                    user: OWNER,
                    content: GENERAL_ISSUE.to_owned(),
                },
                Call::Update {
                    description: page_description(2)
                },
                Call::Disable,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn acknowledges_unknown_components() {
        let source = FakeSource::new(12);
        let (presenter, tx) = FakePresenter::new(false);

        let task = begin(&source, &presenter).await.unwrap();

        let mut unknown = press(OWNER, PageAction::Next);
        unknown.custom_id = "sightings_jump".to_owned();
        tx.unbounded_send(unknown).unwrap();

        task.await.unwrap();

        assert_eq!(source.fetches(), [(0, 5)]);
        assert_eq!(
            presenter.take_calls(),
            [
                Call::Show {
                    description: page_description(1)
                },
                Call::Acknowledge,
                Call::Disable,
            ]
        );
    }
}
