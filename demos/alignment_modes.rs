use profile_aligner::{
    AlignmentMode, PairwiseAligner, Profile, ProfileSequence, SubstitutionMatrix, BLOSUM50,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seq1 = Profile::from(ProfileSequence::from("HEAGAWGHEE").with_id("seq1"));
    let seq2 = Profile::from(ProfileSequence::from("PAWHEAE").with_id("seq2"));

    for mode in [AlignmentMode::Local, AlignmentMode::Global, AlignmentMode::SemiGlobal] {
        let alignment = PairwiseAligner::new(&BLOSUM50)
            .with_alignment_mode(mode)
            .with_gap_penalties(11.0, 1.0)
            .align(&seq1, &seq2)?;

        println!("{:?}: score = {}", mode, alignment.score);
        println!("Positions: {:?}", alignment.start_end_positions);
        print!("{}", alignment);
        println!();
    }

    // Two aligned sequences as one profile against a single sequence
    let nucleotide = SubstitutionMatrix::identity(1.0, -2.0, b"ACGTU");
    let profile = Profile::new(vec![
        ProfileSequence::from("ACGT-ACGT").with_id("a"),
        ProfileSequence::from("ACGTTACGA").with_id("b"),
    ])?;
    let alignment = PairwiseAligner::new(&nucleotide)
        .with_alignment_mode(AlignmentMode::SemiGlobal)
        .align(&profile, &Profile::from("CGTTACG"))?;

    println!("Profile: score = {}", alignment.score);
    print!("{}", alignment);

    Ok(())
}
