use rand::Rng;

pub fn iota(len: usize) -> Vec<u64> {
    (0..len as u64).collect()
}

/// Random values with a split point that leaves both blocks non-empty.
pub fn random_case(rng: &mut impl Rng, max_len: usize) -> (Vec<u64>, usize) {
    let len = rng.gen_range(2..=max_len);
    let data = (0..len).map(|_| rng.gen()).collect();
    let split = rng.gen_range(1..len);

    (data, split)
}

/// Whether every element is one more than the element before it.
pub fn is_counting(values: &[u64]) -> bool {
    values.windows(2).all(|w| w[0] + 1 == w[1])
}
