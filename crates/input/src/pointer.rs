/// Pointer capture as last reported by the host.
///
/// `Released -> Requested -> Active`, and back to `Released` whenever the
/// host reports the capture lost. There is no timeout on a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerCapture {
    #[default]
    Released,
    Requested,
    Active,
}

impl PointerCapture {
    pub fn is_active(self) -> bool {
        self == PointerCapture::Active
    }

    /// Record a capture request. Returns false if capture is already held.
    pub fn request(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        *self = PointerCapture::Requested;
        true
    }

    /// Apply the host's answer.
    pub fn host_changed(&mut self, active: bool) {
        *self = if active {
            PointerCapture::Active
        } else {
            PointerCapture::Released
        };
    }
}
