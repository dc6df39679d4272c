// Step sequencing and terminal mutations across all three structures

use dsviz::sequencer::Sequencer;
use dsviz::structures::{LinkedList, ListOp, Operands, Queue, QueueOp, Vector, VectorOp};
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(100);

fn list() -> Sequencer<LinkedList> {
    Sequencer::new(LinkedList::default(), INTERVAL)
}

fn queue() -> Sequencer<Queue> {
    Sequencer::new(Queue::default(), INTERVAL)
}

/// Start and deliver ticks one interval apart until the run ends
fn run_to_end<S: dsviz::structures::Structure>(seq: &mut Sequencer<S>) -> Vec<usize> {
    let t0 = Instant::now();
    seq.start_at(t0);
    let mut steps = Vec::new();
    let mut now = t0;
    while seq.is_running() {
        now += INTERVAL;
        assert_eq!(seq.pump(now), 1);
        steps.push(seq.step());
    }
    steps
}

#[test]
fn test_steps_increase_by_one_and_stop_at_count() {
    let mut seq = list();
    seq.select_operation(ListOp::Insert);
    let steps = run_to_end(&mut seq);
    assert_eq!(steps, vec![1, 2, 3, 4]);
    assert_eq!(seq.step(), seq.step_count());
    assert!(!seq.is_running());
}

#[test]
fn test_start_is_idempotent_while_running() {
    let mut seq = list();
    seq.select_operation(ListOp::Delete);
    let t0 = Instant::now();
    seq.start_at(t0);
    seq.pump(t0 + INTERVAL);
    assert_eq!(seq.step(), 1);

    // A second start must not rewind or stack a second tick source
    seq.start_at(t0 + INTERVAL);
    assert_eq!(seq.step(), 1);
    assert_eq!(seq.pump(t0 + INTERVAL * 2), 1);
    assert_eq!(seq.step(), 2);
}

#[test]
fn test_restart_after_completion_rewinds() {
    let mut seq = queue();
    seq.select_operation(QueueOp::Dequeue);
    run_to_end(&mut seq);
    assert_eq!(seq.step(), 3);

    seq.start_at(Instant::now());
    assert_eq!(seq.step(), 0);
    assert!(seq.is_running());
}

#[test]
fn test_switching_operation_stops_and_rewinds() {
    let mut seq = list();
    let t0 = Instant::now();
    seq.start_at(t0);
    seq.pump(t0 + INTERVAL * 2);
    assert_eq!(seq.step(), 2);

    seq.select_operation(ListOp::Insert);
    assert_eq!(seq.step(), 0);
    assert!(!seq.is_running());
    // No tick arrives for the abandoned run
    assert_eq!(seq.pump(t0 + INTERVAL * 10), 0);
}

#[test]
fn test_tick_without_start_does_nothing() {
    let mut seq = list();
    seq.tick();
    assert_eq!(seq.step(), 0);
}

#[test]
fn test_pause_keeps_step() {
    let mut seq = list();
    let t0 = Instant::now();
    seq.start_at(t0);
    seq.pump(t0 + INTERVAL);
    seq.stop();
    assert_eq!(seq.step(), 1);
    assert_eq!(seq.pump(t0 + INTERVAL * 5), 0);

    // Resuming continues from the paused step
    seq.start_at(t0 + INTERVAL * 5);
    seq.pump(t0 + INTERVAL * 6);
    assert_eq!(seq.step(), 2);
}

#[test]
fn test_linked_list_insert_in_middle() {
    let mut seq = list();
    seq.select_operation(ListOp::Insert);
    seq.set_operands(Operands::new(15, 1));
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 15, 20, 30]);
}

#[test]
fn test_linked_list_delete_in_middle() {
    let mut seq = list();
    seq.select_operation(ListOp::Delete);
    seq.set_operands(Operands::new(0, 1));
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 30]);
}

#[test]
fn test_linked_list_delete_out_of_range_is_a_no_op() {
    let mut seq = list();
    seq.select_operation(ListOp::Delete);
    seq.set_operands(Operands::new(0, 7));
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 20, 30]);
}

#[test]
fn test_traverse_leaves_list_alone() {
    let mut seq = list();
    let steps = run_to_end(&mut seq);
    assert_eq!(steps.len(), 4);
    assert_eq!(seq.collection().values(), &[10, 20, 30]);
}

#[test]
fn test_queue_enqueue_and_full_queue() {
    let mut seq = queue();
    seq.select_operation(QueueOp::Enqueue);
    seq.set_operands(Operands::new(40, 0));
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 20, 30, 40]);

    seq.set_operands(Operands::new(50, 0));
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 20, 30, 40, 50]);
    assert!(!seq.can_start());

    // The engine itself still runs on a full queue; the mutation is skipped
    seq.set_operands(Operands::new(60, 0));
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 20, 30, 40, 50]);
}

#[test]
fn test_queue_dequeue_until_empty() {
    let mut seq = queue();
    seq.select_operation(QueueOp::Dequeue);
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[20, 30]);

    run_to_end(&mut seq);
    run_to_end(&mut seq);
    assert!(seq.collection().is_empty());
    assert!(!seq.can_start());

    run_to_end(&mut seq);
    assert!(seq.collection().is_empty());
}

#[test]
fn test_reset_all_restores_seed() {
    let mut seq = list();
    seq.select_operation(ListOp::Insert);
    run_to_end(&mut seq);
    assert_eq!(seq.collection().len(), 4);

    seq.reset_all();
    assert_eq!(seq.collection().values(), &[10, 20, 30]);
    assert_eq!(seq.step(), 0);
    assert!(!seq.is_running());
}

#[test]
fn test_preview_does_not_mutate_before_last_step() {
    let mut seq = list();
    seq.select_operation(ListOp::Insert);
    let t0 = Instant::now();
    seq.start_at(t0);
    seq.pump(t0 + INTERVAL * 3);
    assert_eq!(seq.step(), 3);

    let frame = seq.frame();
    assert_eq!(frame.display.values(), &[10, 15, 20, 30]);
    assert_eq!(seq.collection().values(), &[10, 20, 30]);
}

#[test]
fn test_vector_sort_and_reverse() {
    let mut seq = Sequencer::new(Vector::default(), INTERVAL);
    seq.select_operation(VectorOp::Sort);
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    seq.select_operation(VectorOp::Reverse);
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_vector_erase_guard() {
    let mut seq = Sequencer::new(Vector::default(), INTERVAL);
    seq.select_operation(VectorOp::Erase);
    seq.set_operands(Operands::new(0, 9));
    assert!(!seq.can_start());
    seq.set_operands(Operands::new(0, 8));
    assert!(seq.can_start());
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[5, 9, 3, 7, 1, 8, 6, 2]);
}

#[test]
fn test_dropping_a_running_sequencer_is_clean() {
    let mut seq = list();
    seq.start_at(Instant::now());
    assert!(seq.is_running());
    drop(seq);
}

#[test]
fn test_reset_all_mid_run_after_mutation() {
    let mut seq = list();
    seq.select_operation(ListOp::Insert);
    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 15, 20, 30]);

    let t0 = Instant::now();
    seq.start_at(t0);
    seq.pump(t0 + INTERVAL * 2);
    assert_eq!(seq.step(), 2);

    seq.reset_all();
    assert!(!seq.is_running());
    assert_eq!(seq.step(), 0);
    assert_eq!(seq.collection().values(), &[10, 20, 30]);
    assert_eq!(seq.pump(t0 + INTERVAL * 20), 0);
    assert_eq!(seq.collection().values(), &[10, 20, 30]);
}

#[test]
fn test_new_operands_rewind_a_live_run() {
    let mut seq = list();
    seq.select_operation(ListOp::Insert);
    let t0 = Instant::now();
    seq.start_at(t0);
    seq.pump(t0 + INTERVAL * 3);
    assert_eq!(seq.step(), 3);

    // Same operands leave the run alone
    seq.set_operands(Operands::new(15, 1));
    assert!(seq.is_running());
    assert_eq!(seq.step(), 3);

    seq.set_operands(Operands::new(99, 1));
    assert!(!seq.is_running());
    assert_eq!(seq.step(), 0);
    assert_eq!(seq.pump(t0 + INTERVAL * 20), 0);
    assert_eq!(seq.collection().values(), &[10, 20, 30]);

    run_to_end(&mut seq);
    assert_eq!(seq.collection().values(), &[10, 99, 20, 30]);
}
