use std::f64::consts::PI;

/// Side length of a square box holding `particle_count` particles at reduced
/// number density `density`: L = sqrt(N / rho)
pub fn box_length(particle_count: u32, density: f64) -> f64 {
    (particle_count as f64 / density).sqrt()
}

/// Area of the square simulation plane
pub fn area(box_length: f64) -> f64 {
    box_length * box_length
}

/// Fraction of the plane covered by hard discs of the given radius
pub fn area_fraction(particle_count: u32, radius: f64, box_length: f64) -> f64 {
    particle_count as f64 * PI * radius * radius / area(box_length)
}
