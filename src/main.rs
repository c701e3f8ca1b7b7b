use std::{future::IntoFuture, process, sync::Arc};

use postboard::{
    application::{
        error::AppError,
        pagination::PostListService,
        repos::PostsRepo,
        seed::{SeedOutcome, Seeder},
    },
    config::{self, Command},
    domain::posts::seed_list,
    infra::{
        db::{DisconnectedRepo, PostgresRepositories},
        error::InfraError,
        http::{self, DrainOutcome, HttpState},
        telemetry,
    },
};
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging)?;

    match cli_args.command.unwrap_or(Command::Serve(Default::default())) {
        Command::Serve(_) => run_serve(settings).await,
        Command::Seed => run_seed(settings).await,
    }
}

/// Store handle threaded through the HTTP state.
struct Store {
    posts: Arc<dyn PostsRepo>,
    db: Option<Arc<PostgresRepositories>>,
}

impl Store {
    fn disconnected(reason: impl Into<String>) -> Self {
        Self {
            posts: Arc::new(DisconnectedRepo::new(reason)),
            db: None,
        }
    }
}

/// Build the store without waiting for the database. Configuration problems
/// leave the service running on a store that fails every query.
fn open_store(settings: &config::Settings) -> Store {
    let Some(url) = settings.database.url.as_deref() else {
        error!(
            target = "postboard::store",
            "database url is not configured; post listing will fail"
        );
        return Store::disconnected("database url is not configured");
    };

    match PostgresRepositories::connect_lazy(
        url,
        settings.database.max_connections.get(),
        settings.database.acquire_timeout,
    ) {
        Ok(pool) => {
            let db = Arc::new(PostgresRepositories::new(pool));
            Store {
                posts: db.clone(),
                db: Some(db),
            }
        }
        Err(err) => {
            error!(
                target = "postboard::store",
                error = %err,
                "could not configure the database connection"
            );
            Store::disconnected(err.to_string())
        }
    }
}

/// Wait for the database in the background, create the schema and seed once.
fn spawn_store_bootstrap(
    db: Arc<PostgresRepositories>,
    seeder: Option<Arc<Seeder>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = PostgresRepositories::run_migrations(db.pool()).await {
            error!(
                target = "postboard::store",
                error = %err,
                "could not connect to the database"
            );
            return;
        }
        info!(target = "postboard::store", "connected to the database");

        let Some(seeder) = seeder else {
            return;
        };
        if let Err(err) = seeder.run().await {
            error!(
                target = "postboard::seed",
                error = %err,
                "seeding failed"
            );
        }
    })
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let store = open_store(&settings);

    let bootstrap = store.db.clone().map(|db| {
        let seeder = settings
            .seed
            .enabled
            .then(|| Arc::new(Seeder::new(db.clone(), seed_list())));
        spawn_store_bootstrap(db, seeder)
    });

    let posts = PostListService::new(store.posts.clone())
        .with_default_limit(settings.pagination.default_limit.get().into());
    let state = HttpState {
        posts: Arc::new(posts),
        db: store.db.clone(),
    };

    let result = serve_http(&settings, state).await;

    if let Some(handle) = bootstrap {
        handle.abort();
        let _ = handle.await;
    }

    if let Some(db) = store.db {
        if tokio::time::timeout(settings.server.graceful_shutdown, db.close())
            .await
            .is_err()
        {
            warn!(
                target = "postboard::store",
                "timed out closing database connections"
            );
        }
    }

    result
}

async fn run_seed(settings: config::Settings) -> Result<(), AppError> {
    let url = settings
        .database
        .url
        .as_deref()
        .ok_or_else(|| InfraError::configuration("database url is not configured"))?;

    let pool = PostgresRepositories::connect(
        url,
        settings.database.max_connections.get(),
        settings.database.acquire_timeout,
    )
    .await
    .map_err(InfraError::from)?;
    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(InfraError::from)?;

    let db = Arc::new(PostgresRepositories::new(pool));
    let seeder = Seeder::new(db.clone(), seed_list());
    let outcome = seeder
        .run()
        .await
        .map_err(|err| AppError::unexpected(format!("seeding failed: {err}")))?;

    match outcome {
        SeedOutcome::Inserted(count) => {
            info!(target = "postboard::seed", inserted = count, "seed completed")
        }
        SeedOutcome::Skipped { existing } => {
            info!(target = "postboard::seed", existing, "seed not needed")
        }
        SeedOutcome::AlreadyRan => {}
    }

    db.close().await;
    Ok(())
}

async fn serve_http(settings: &config::Settings, state: HttpState) -> Result<(), AppError> {
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "postboard::http",
        addr = %settings.server.addr,
        "listening"
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server = axum::serve(listener, router.into_make_service()).with_graceful_shutdown(
        async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(());
        },
    );

    match http::serve_until_drained(
        server.into_future(),
        shutdown_rx,
        settings.server.graceful_shutdown,
    )
    .await
    {
        DrainOutcome::Finished(result) => {
            result.map_err(|err| AppError::unexpected(format!("server error: {err}")))?
        }
        DrainOutcome::TimedOut => warn!(
            target = "postboard::http",
            grace_seconds = settings.server.graceful_shutdown.as_secs(),
            "in-flight requests did not finish before the shutdown deadline"
        ),
    }

    info!(target = "postboard::http", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!(target = "postboard::http", "shutdown signal received");
}
