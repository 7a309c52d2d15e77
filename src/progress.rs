pub trait ProgressCallback: Send {
    fn on_generation_complete(&mut self, generation: u64, best_score: usize, best: &str);
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &mut T {
    fn on_generation_complete(&mut self, generation: u64, best_score: usize, best: &str) {
        (**self).on_generation_complete(generation, best_score, best)
    }
}

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_complete(&mut self, generation: u64, best_score: usize, best: &str) {
        println!(
            "Generation {} complete. Best score: {}, Best: {}",
            generation, best_score, best
        );
    }
}

/// No-op callback for callers that only want the final outcome
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_complete(&mut self, _generation: u64, _best_score: usize, _best: &str) {}
}
