use clap::Parser;
use tokio::io::BufReader;
use trends::dashboard::user_message;
use trends_app::render::render;
use trends_app::Args;

/// Charts the most popular languages of recently created GitHub repositories

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    if args.watch {
        return trends_app::watch::watch(&args, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await;
    }

    match trends_app::load_trends(&args).await {
        Ok(trends) => {
            println!("{}", render(&trends));
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", user_message(&err));
            std::process::exit(1);
        }
    }
}
