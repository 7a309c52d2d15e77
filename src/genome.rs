/// Genome representation for the string search
///
/// A genome is a candidate string stored as a sequence of characters, every
/// one drawn from the configured gene alphabet. Fitness is the count of
/// positions where the genome agrees with the target, so the linear layout
/// keeps the genetic operators trivial:
/// - **Crossover**: splicing two genomes is array slicing
/// - **Mutation**: replacing one gene is a single index write
/// - **No invalid states**: any genome over the alphabet is a legal candidate
pub type Genome = Vec<char>;
