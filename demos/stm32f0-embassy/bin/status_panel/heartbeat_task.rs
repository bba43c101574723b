use embassy_time::{Duration, Instant, Ticker};

use button_monitor::{HeartbeatTask, Task};
use stm32f0_embassy_demos::io::LedIndicator;

use crate::types::SAMPLE_HZ;

#[embassy_executor::task]
pub async fn heartbeat_task(led: LedIndicator) {
    let mut heartbeat = HeartbeatTask::new(led);

    // Same period as the sampler: the LED carries a square wave at half
    // the sampling rate while the executor is healthy.
    let mut ticker = Ticker::every(Duration::from_hz(SAMPLE_HZ));
    loop {
        ticker.next().await;
        heartbeat.run(Instant::now().as_ticks() as u32);
    }
}
