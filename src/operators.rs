use crate::genome::Genome;
use rand::Rng;
use std::cmp::Reverse;

/// Positional fitness: count of positions where candidate and target agree
pub fn fitness(candidate: &[char], target: &[char]) -> usize {
    candidate
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| a == b)
        .count()
}

/// Generate a random genome of `length` genes drawn uniformly from `genes`
pub fn random_genome<R: Rng>(length: usize, genes: &[char], rng: &mut R) -> Genome {
    (0..length)
        .map(|_| genes[rng.gen_range(0..genes.len())])
        .collect()
}

/// Uniform parent selection: pick one parent with replacement
pub fn pick_parent<'a, R: Rng>(parents: &'a [Genome], rng: &mut R) -> &'a Genome {
    &parents[rng.gen_range(0..parents.len())]
}

/// Single-point crossover: prefix of one parent joined to the suffix of the other
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Genome {
    let len = parent1.len().min(parent2.len());
    if len <= 1 {
        return parent1.clone();
    }

    let point = rng.gen_range(1..len);

    let mut child = parent1[..point].to_vec();
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Mutation: with probability `mutation_probability`, replace exactly one
/// randomly chosen gene with a random gene from the alphabet. The chance is
/// per individual, not per gene, so every position keeps a non-zero chance
/// of being touched over many generations.
pub fn mutate<R: Rng>(
    genome: &mut Genome,
    mutation_probability: f64,
    genes: &[char],
    rng: &mut R,
) {
    if rng.gen::<f64>() < mutation_probability {
        let position = rng.gen_range(0..genome.len());
        genome[position] = genes[rng.gen_range(0..genes.len())];
    }
}

/// Keep the top `selected_size` scorers, best first. The sort is stable, so
/// equal scores keep their original population order.
pub fn select_parents(evaluated: &[(Genome, usize)], selected_size: usize) -> Vec<Genome> {
    let mut ranked: Vec<&(Genome, usize)> = evaluated.iter().collect();
    ranked.sort_by_key(|entry| Reverse(entry.1));

    ranked
        .into_iter()
        .take(selected_size)
        .map(|(genome, _)| genome.clone())
        .collect()
}
