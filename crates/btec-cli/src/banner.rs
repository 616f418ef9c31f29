/// Licence notice, disclaimers and welcome line shown at startup.
pub const BANNER: &str = "\
* LICENSING INFORMATION **************************************************
* This software is distributed in the hope that it will be useful.       *
* It is licensed under the MIT License, a permissive open-source         *
* software licence. You are allowed to redistribute and/or modify the    *
* software under the conditions of the licence.                          *
**************************************************************************

* DISCLAIMERS ************************************************************
* This calculator is for Level 3 2010 BTEC National qualifications only. *
* This calculator assumes that the user has passed all units.            *
* This calculator may be out of date.                                    *
* No guarantee or warranty is provided in respect to the accuracy or     *
* correctness of the information that this calculator provides.          *
**************************************************************************

Welcome to the BTEC Nationals grade and UCAS points calculator.
";
