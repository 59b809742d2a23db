use core::sync::atomic::{AtomicBool, Ordering};

static SYMMETRY_CHECK_ENABLED: AtomicBool = AtomicBool::new(true);

// Cholesky, LDLT and Bunch-Kaufman only read one triangle of the input.
// When enabled, the input is checked to be symmetric (hermitian) first.
pub fn is_symmetry_check_enabled() -> bool {
    SYMMETRY_CHECK_ENABLED.load(Ordering::Relaxed)
}

pub fn set_symmetry_check_enabled(val: bool) {
    SYMMETRY_CHECK_ENABLED.store(val, Ordering::Relaxed)
}
