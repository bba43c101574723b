use embassy_time::{Duration, Instant, Ticker};

use button_monitor::{Button, ButtonBank, DebounceTask, Polarity, Task};
use stm32f0_embassy_demos::io::{ButtonArray, LedIndicator};

use crate::types::{SAMPLE_HZ, SNAPSHOT};

#[embassy_executor::task]
pub async fn sampler_task(buttons: ButtonArray, press_led: LedIndicator) {
    // Nucleo wiring pulls the lines up; a press shorts them to ground.
    let bank = ButtonBank::new([Polarity::ActiveLow; Button::COUNT]);
    let mut sampler = DebounceTask::new(bank, buttons, press_led, &SNAPSHOT);

    let mut ticker = Ticker::every(Duration::from_hz(SAMPLE_HZ));
    loop {
        ticker.next().await;
        sampler.run(Instant::now().as_ticks() as u32);
    }
}
