/// Format whole seconds as a WebVTT timestamp (`hh:mm:ss.000`)
pub fn format_timestamp(seconds: u64) -> String {
    let secs = seconds % 60;
    let total_minutes = seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02}.000", hours, minutes, secs)
}
