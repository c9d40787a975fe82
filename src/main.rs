//! Scriptorium - builds a markdown blog with the scriptorium toolkit.

mod blog;
mod cli;
mod init;

use anyhow::{Result, bail};
use blog::{BlogLoader, BlogPost, BlogPostProvider, HomePage, SiteContent, fill_missing_titles};
use clap::Parser;
use cli::{BuildArgs, Cli, Commands};
use init::new_site;
use scriptorium::{
    Context, SiteConfig,
    generator::{FeedPage, RobotsPage, SitemapPage},
    log,
};
use std::{path::Path, time::Instant};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root_dir();

    match &cli.command {
        Commands::Init { name } => {
            let root = name.as_ref().map_or_else(|| root.clone(), |name| root.join(name));
            new_site(&root, &cli.config)
        }
        Commands::Build { build_args } => {
            let config = load_config(&cli, &root, build_args)?;
            build_site(&config, &root).await
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli, root: &Path, args: &BuildArgs) -> Result<SiteConfig> {
    let config_path = root.join(&cli.config);
    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    update_with_args(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Let command line flags win over site.toml
fn update_with_args(config: &mut SiteConfig, args: &BuildArgs) {
    update_option(&mut config.build.clean, args.clean.as_ref());
    update_option(&mut config.build.output, args.output.as_ref());
    update_option(&mut config.site.url, args.base_url.as_ref());
}

fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
    if let Some(option) = cli_option {
        *config_option = option.clone();
    }
}

async fn build_site(config: &SiteConfig, root: &Path) -> Result<()> {
    let started = Instant::now();
    let mut context: Context<SiteContent> = Context::from_config(config, root);

    if config.build.clean {
        context.clear_build_folder()?;
    }
    if config.build.assets && context.assets_directory().is_dir() {
        context.copy_assets()?;
    }

    context
        .load_content(vec![Box::new(BlogLoader::new(config.build.words_per_minute))])
        .await?;
    fill_missing_titles(&mut context)?;
    context.copy_content_resources()?;

    context.generate_static_pages(vec![Box::new(HomePage)]).await?;
    context
        .generate_content_pages(vec![Box::new(BlogPostProvider)])
        .await?;
    context
        .generate_static_pages(vec![
            Box::new(FeedPage::<BlogPost>::new()),
            Box::new(RobotsPage),
            Box::new(SitemapPage),
        ])
        .await?;

    context.check_warnings();
    log!(
        "build";
        "{} pages in {} ({:.2?})",
        context.site_map().len(),
        context.build_directory().display(),
        started.elapsed()
    );
    Ok(())
}
