use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starbar_engine::logging::{LoggingConfig, init_logging};
use starbar_ui::prelude::*;

const DENSITY: f32 = 2.0;
const SEED: u64 = 0x5eed;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let markup_path = args.next().map(PathBuf::from);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "out".to_string()));

    let src = match &markup_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => include_str!("../ui/demo.mkml").to_string(),
    };
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut scene = UiScene::with_scale(DENSITY);
    let loader = DslLoader::new();
    let bindings = DslBindings::new().with_density(DENSITY).with_host(scene.host());
    let doc = loader.parse(&src).context("failed to parse markup")?;
    let mut bar = loader
        .build_rating_bar(&doc, &bindings, &SvgAssetProvider::builtin())
        .context("failed to build rating bar")?;

    println!("rating: {}", bar.rating());
    let mut snap = Snapshots::new(out_dir);
    snap.save("initial", &mut scene, &mut bar, &UiInput::default())?;

    // ── drag across the bar, then release ─────────────────────────────────
    let width = bar.natural_size().x;
    let y = bar.star_size() / 2.0;
    let stops = [0.1, 0.35, 0.6, 0.72];
    for (i, frac) in stops.iter().enumerate() {
        let input = UiInput::at(Vec2::new(width * frac, y), true);
        step(&mut scene, &mut bar, &input);
        report(&bindings, &bar);
        if scene.take_dirty() {
            snap.save(&format!("drag_{i}"), &mut scene, &mut bar, &input)?;
        }
    }
    let release = UiInput::at(Vec2::new(width * 0.72, y), false);
    step(&mut scene, &mut bar, &release);
    log::info!("click performed ({} total)", scene.host().clicks());

    // ── random rating, color and size changes ─────────────────────────────
    let mut rng = StdRng::seed_from_u64(SEED);

    let rating = rng.r#gen::<f32>() * bar.star_count() as f32;
    bar.set_rating(rating);
    report(&bindings, &bar);
    snap.save("random_rating", &mut scene, &mut bar, &release)?;

    let color = Color::rgb(rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255));
    bar.set_star_color(color);
    snap.save("random_color", &mut scene, &mut bar, &release)?;

    let size = rng.gen_range(20..80) as f32 * DENSITY;
    bar.set_star_size(size);
    snap.save("random_size", &mut scene, &mut bar, &release)?;

    Ok(())
}

/// Routes one input snapshot through the scene at the bar's own size.
fn step(scene: &mut UiScene, bar: &mut RatingBar, input: &UiInput) {
    let vp = viewport(bar);
    let _ = scene.frame(bar, vp, input);
}

/// Viewport that fits the bar exactly.
fn viewport(bar: &RatingBar) -> Vec2 {
    let size = bar.natural_size();
    Vec2::new(size.x.ceil().max(1.0), size.y.ceil().max(1.0))
}

fn report(bindings: &DslBindings, bar: &RatingBar) {
    for event in bindings.take_events() {
        if event == "rated" {
            println!("rating: {:.2}", bar.rating());
        }
    }
}

/// Writes numbered PNG frames into one directory.
struct Snapshots {
    dir: PathBuf,
    renderer: RasterRenderer,
    count: u32,
}

impl Snapshots {
    fn new(dir: PathBuf) -> Self {
        Self { dir, renderer: RasterRenderer::new().clear_color(Color::WHITE), count: 0 }
    }

    /// Renders one frame with `input` held steady, so no new pointer
    /// events are derived.
    fn save(
        &mut self,
        label: &str,
        scene: &mut UiScene,
        bar: &mut RatingBar,
        input: &UiInput,
    ) -> Result<()> {
        let vp = viewport(bar);
        let list = scene.frame(bar, vp, input);
        let image = self.renderer.render(list, vp.x as u32, vp.y as u32);
        let path = self.dir.join(format!("{:02}_{label}.png", self.count));
        write_png(&image, &path)?;
        let _ = scene.take_dirty();
        self.count += 1;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

fn write_png(image: &image::RgbaImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(scene: &UiScene) -> RatingBar {
        let config = RatingConfig { star_size: 40.0, star_spacing: 0.0, ..RatingConfig::default() };
        let provider = MemoryAssetProvider::from_fn(|_| image::RgbaImage::new(4, 4));
        RatingBar::new(config, &provider).unwrap().host(scene.host())
    }

    #[test]
    fn drag_steps_update_rating() {
        let mut scene = UiScene::new();
        let mut bar = bar(&scene);
        step(&mut scene, &mut bar, &UiInput::at(Vec2::new(92.0, 10.0), true));
        assert_eq!(bar.rating(), 2.25);
        step(&mut scene, &mut bar, &UiInput::at(Vec2::new(150.0, 10.0), true));
        assert_eq!(bar.rating(), 3.75);
        step(&mut scene, &mut bar, &UiInput::at(Vec2::new(150.0, 10.0), false));
        assert_eq!(scene.host().clicks(), 1);
        assert!(scene.take_dirty());
    }

    #[test]
    fn viewport_fits_bar() {
        let scene = UiScene::new();
        assert_eq!(viewport(&bar(&scene)), Vec2::new(200.0, 40.0));
    }

    #[test]
    fn rating_changes_are_reported_once() {
        let bindings = DslBindings::new();
        let loader = DslLoader::new();
        let doc = loader.parse("RatingBar { on_change: rated }").unwrap();
        let provider = MemoryAssetProvider::from_fn(|_| image::RgbaImage::new(2, 2));
        let mut bar = loader.build_rating_bar(&doc, &bindings, &provider).unwrap();
        bar.set_rating(1.5);
        assert_eq!(bindings.take_events(), vec!["rated"]);
    }
}
