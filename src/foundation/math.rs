/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let w = deg % 360.0;
    if w < 0.0 { w + 360.0 } else { w }
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}
