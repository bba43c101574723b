use embassy_time::{Duration, Instant, Ticker};

use button_monitor::{RenderTask, StatusPanel, Task, TickRate};
use stm32f0_embassy_demos::panel::DefmtPanel;

use crate::types::{FRAME_HZ, SNAPSHOT};

#[embassy_executor::task]
pub async fn render_task() {
    // Elapsed time is derived from the embassy tick counter; the low word
    // wraps after ~36 hours at 32.768 kHz, which the cadence math absorbs
    // but the readout restarts from zero.
    let rate = TickRate::from_hz(embassy_time::TICK_HZ as u32);
    let mut renderer = RenderTask::new(StatusPanel::new(DefmtPanel::new()), &SNAPSHOT, rate);

    let mut ticker = Ticker::every(Duration::from_hz(FRAME_HZ));
    loop {
        ticker.next().await;
        renderer.run(Instant::now().as_ticks() as u32);
    }
}
