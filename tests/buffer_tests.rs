use buffer_utils::buffer::{
    BufferError, InvalidStartError, Stride, StrideError, mean, mean_slice,
    try_copy_every_nth_slice, try_mean_slice,
};

#[test]
fn test_decimate_sensor_frame() {
    let frame = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut picked = [0; 3];
    Stride::<3, 1>::copy(&frame, &mut picked);
    assert_eq!(picked, [2, 5, 8]);
    assert_eq!(mean(&picked), 5.0);
}

#[test]
fn test_dynamic_frames() {
    let frames: Vec<Vec<u16>> = vec![vec![4, 0, 8], vec![1, 0, 2, 0, 3], vec![9]];

    for frame in &frames {
        let mut picked = vec![0; Stride::<2>::required_len(frame.len())];
        assert_eq!(try_copy_every_nth_slice::<2, 0, _>(frame, &mut picked), Ok(picked.len()));
        assert!(picked.iter().all(|v| *v != 0), "Only even indices should be selected.");
    }

    assert_eq!(mean_slice(&frames[0]), 4.0);
    assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
}

#[test]
fn test_errors_propagate() {
    let run = |src: &[f32], dst: &mut [f32]| -> Result<f64, BufferError> {
        Stride::<4, 2>::try_copy_slice(src, dst)?;
        Ok(try_mean_slice(dst)?)
    };

    let mut dst = [0.0; 2];
    assert_eq!(run(&[0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 5.0], &mut dst), Ok(4.0));
    assert_eq!(
        run(&[1.0], &mut dst),
        Err(BufferError::Stride(StrideError::InvalidStart(InvalidStartError)))
    );
    assert!(run(&[0.0; 10], &mut dst[..1]).is_err_and(|e| e.is_stride()));
    assert!(run(&[0.0; 2], &mut []).is_err_and(|e| e.is_mean()));
}

#[test]
fn test_fail_fast_message() {
    let payload = std::panic::catch_unwind(|| mean_slice::<u8>(&[])).unwrap_err();
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("Source container must be non-empty")
    );
}
