use color_eyre::Result;
use color_eyre::eyre::bail;
use colored::{ColoredString, Colorize};
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Runs one test call and records the outcome in a `SuiteReport`.
#[macro_export]
macro_rules! run_test {
    ($report:expr, $call:expr) => {
        $report.record(stringify!($call), $call).await
    };
}

/// Runs every listed test against the context, then fails if any of them failed.
#[macro_export]
macro_rules! execute_suite {
    ($context:expr, [ $($test_fn:ident),* $(,)? ]) => {{
        let mut report = $crate::runner::orchestration_utils::SuiteReport::default();
        $( $crate::run_test!(report, $test_fn($context)); )*
        report.finish()?;
    }};
}

pub struct SuiteReport {
    started: Instant,
    passed: Vec<String>,
    failed: Vec<String>,
}

impl Default for SuiteReport {
    fn default() -> Self {
        println!();
        Self {
            started: Instant::now(),
            passed: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl SuiteReport {
    pub async fn record<Fut>(&mut self, raw_name: &str, test: Fut)
    where
        Fut: Future<Output = Result<()>>,
    {
        // `test_foo(&context)` -> `test_foo`
        let name = raw_name.split('(').next().unwrap_or(raw_name).trim().to_owned();

        rule();
        println!("{} {}", " RUNNING ".on_cyan().black().bold(), name.cyan().bold());

        let start = Instant::now();
        let result = test.await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                outcome(" PASSED ".on_green(), name.green(), elapsed);
                self.passed.push(name);
            }
            Err(e) => {
                outcome(" FAILED ".on_red(), name.red(), elapsed);
                println!("\n{e:?}");
                self.failed.push(name);
            }
        }
    }

    pub fn finish(self) -> Result<()> {
        let total = self.passed.len() + self.failed.len();
        rule();
        println!(
            "{} {}/{} tests passed in {:.2?}.",
            " SUMMARY ".on_purple().black().bold(),
            self.passed.len(),
            total,
            self.started.elapsed()
        );
        rule();
        println!();

        if !self.failed.is_empty() {
            bail!("{} test(s) failed: {}", self.failed.len(), self.failed.join(", "));
        }
        Ok(())
    }
}

fn rule() {
    println!("{}", "─".repeat(60).truecolor(80, 80, 80));
}

fn outcome(label: ColoredString, name: ColoredString, elapsed: Duration) {
    println!("{} {} ({:.2?})", label.black().bold(), name, elapsed);
}

pub fn setup_tracing_and_panic_handling() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,sqlx=warn,api=debug,common_services=debug,hyper=error".into());

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
    color_eyre::install().expect("installing color_eyre failed");
}
