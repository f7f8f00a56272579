use anyhow::Result;
use watchface_common::WatchApp;
use watchface_sdl2::{SdlContext, SimHost, WatchInitInfo};
use watchface_unix::UnixClockFace;

pub enum FaceType {
    Unix,
}

pub fn run(face: FaceType) -> Result<()> {
    match face {
        FaceType::Unix => run_unix(),
    }
}

pub fn run_unix() -> Result<()> {
    let app = UnixClockFace::default();
    let watch_host = SimHost::new();
    let name = <UnixClockFace as WatchApp<SimHost>>::name(&app);
    let init_info = WatchInitInfo::builder()
        .title(format!("Watchface - {}", name))
        .build();
    SdlContext::run(init_info, watch_host, app)?;
    Ok(())
}
