use futures_lite::future;
use rmdialog_audio::AudioOutput;
use rmdialog_core::profiling::profile_function;
use rmdialog_render::CanvasPresenter;
use rmdialog_text::{LayoutBox, TextMetrics, WrappedLine, layout, wrap};

use crate::{
    config::DialogueConfig,
    error::DialogueResult,
    platform::Platform,
    resources::DialogueResources,
    reveal::{
        AsyncTimer, Dismissal, PresentationSink, RevealOutcome, RevealScheduler,
        wait_for_dismissal,
    },
    scene::DialogueScene,
};

/// Show the dialogue described by `config` until it is dismissed.
///
/// Resources and the audio device are opened before the window is created.
pub fn run(config: DialogueConfig) -> DialogueResult<Dismissal> {
    profile_function!();
    let mut resources = DialogueResources::load(&config)?;
    let audio = AudioOutput::open_default()?;

    let lines = wrap(
        &config.text,
        config.viewport.text_max_width(),
        |text| resources.font.text_width(text),
    )?;
    let boxes = layout(&lines, &mut resources.font, &config.viewport, config.alignment);
    tracing::info!(
        "Laid out {} chars in {} lines (font height {}px)",
        config.text.chars().count(),
        lines.len(),
        resources.font.font_height()
    );

    let mut platform = Platform::new(config.window_size())?;
    let presenter = CanvasPresenter::new(platform.window(), config.window_size())?;
    let mut scene = DialogueScene::new(presenter, audio, resources, &config.viewport);
    scene.present()?;

    let scheduler = RevealScheduler::new(config.delays);
    future::block_on(reveal_then_wait(
        &scheduler,
        &lines,
        &boxes,
        &mut scene,
        &mut platform,
    ))
}

async fn reveal_then_wait(
    scheduler: &RevealScheduler,
    lines: &[WrappedLine],
    boxes: &[LayoutBox],
    scene: &mut DialogueScene,
    platform: &mut Platform,
) -> DialogueResult<Dismissal> {
    let mut timer = AsyncTimer;
    match scheduler
        .run(lines, boxes, scene, platform, &mut timer)
        .await?
    {
        RevealOutcome::Cancelled => Ok(Dismissal::Quit),
        RevealOutcome::Completed => {
            tracing::debug!("Reveal complete, waiting for dismissal");
            wait_for_dismissal(platform, &mut timer).await
        }
    }
}
